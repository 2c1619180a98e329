use serde::Serialize;

use super::error::FlowError;
use super::field::FormField;

/// Which side of the marketplace a visitor signs in as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Employee,
    Employer,
}

impl Role {
    pub const fn label(self) -> &'static str {
        match self {
            Role::Employee => "employee",
            Role::Employer => "employer",
        }
    }
}

/// Sign-in form. Credentials are only presence-checked; nothing is authenticated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginForm {
    pub email: FormField,
    #[serde(skip)]
    pub password: FormField,
    pub role: Role,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: FormField::new("email"),
            password: FormField::new("password"),
            role: Role::default(),
        }
    }
}

impl LoginForm {
    /// Returns the selected role when both credentials are present.
    pub fn validate(&self) -> Result<Role, FlowError> {
        let missing: Vec<&'static str> = [&self.email, &self.password]
            .into_iter()
            .filter(|field| field.value().is_empty())
            .map(FormField::name)
            .collect();

        if missing.is_empty() {
            Ok(self.role)
        } else {
            Err(FlowError::MissingFields { fields: missing })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_credentials_are_required() {
        let mut form = LoginForm::default();
        form.email.set("hr@techflow.io");

        let err = form.validate().expect_err("password missing");
        assert_eq!(err.to_string(), "Please fill in all fields");
        assert_eq!(err.fields(), vec!["password"]);

        form.password.set("hunter2");
        assert_eq!(form.validate(), Ok(Role::Employee));

        form.role = Role::Employer;
        assert_eq!(form.validate(), Ok(Role::Employer));
    }
}
