//! Page-level controller: sign-in state and dispatch to the active role's flow.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::employee::EmployeeFlow;
use super::employer::EmployerFlow;
use super::error::FlowError;
use super::login::{LoginForm, Role};

/// Sign-in state for one page lifetime. There is no logout and nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionAuth {
    pub is_logged_in: bool,
    pub role: Option<Role>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

/// The one flow currently rendered.
#[derive(Debug, Clone, Copy)]
pub enum ActiveFlow<'a> {
    SignIn(&'a LoginForm),
    Employee(&'a EmployeeFlow),
    Employer(&'a EmployerFlow),
}

impl ActiveFlow<'_> {
    pub fn screen_label(&self) -> &'static str {
        match self {
            ActiveFlow::SignIn(_) => "sign in",
            ActiveFlow::Employee(flow) => match flow.schedule() {
                Some(schedule) => schedule.screen().label(),
                None => flow.screen().label(),
            },
            ActiveFlow::Employer(flow) => flow.screen().label(),
        }
    }
}

/// Serializable view of where a session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub is_logged_in: bool,
    pub role: Option<Role>,
    pub screen: &'static str,
}

#[derive(Debug, Default)]
pub struct FlowOrchestrator {
    auth: SessionAuth,
    login_form: LoginForm,
    employee: EmployeeFlow,
    employer: EmployerFlow,
}

impl FlowOrchestrator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auth(&self) -> &SessionAuth {
        &self.auth
    }

    pub fn login_form_mut(&mut self) -> &mut LoginForm {
        &mut self.login_form
    }

    /// Validate the sign-in form and log in with the selected role.
    pub fn submit_login(&mut self) -> Result<Role, FlowError> {
        let role = self.login_form.validate()?;
        self.login(role);
        Ok(role)
    }

    /// Mark the session signed in and restart that role's flow from its first screen.
    pub fn login(&mut self, role: Role) {
        self.auth = SessionAuth {
            is_logged_in: true,
            role: Some(role),
            signed_in_at: Some(Utc::now()),
        };

        match role {
            Role::Employee => self.employee = EmployeeFlow::new(),
            Role::Employer => self.employer = EmployerFlow::new(),
        }

        info!(role = role.label(), "signed in");
    }

    pub fn active(&self) -> ActiveFlow<'_> {
        match (self.auth.is_logged_in, self.auth.role) {
            (true, Some(Role::Employee)) => ActiveFlow::Employee(&self.employee),
            (true, Some(Role::Employer)) => ActiveFlow::Employer(&self.employer),
            _ => ActiveFlow::SignIn(&self.login_form),
        }
    }

    pub fn employee_mut(&mut self) -> Result<&mut EmployeeFlow, FlowError> {
        if matches!(self.active(), ActiveFlow::Employee(_)) {
            Ok(&mut self.employee)
        } else {
            Err(FlowError::WrongRole {
                expected: Role::Employee.label(),
            })
        }
    }

    pub fn employer_mut(&mut self) -> Result<&mut EmployerFlow, FlowError> {
        if matches!(self.active(), ActiveFlow::Employer(_)) {
            Ok(&mut self.employer)
        } else {
            Err(FlowError::WrongRole {
                expected: Role::Employer.label(),
            })
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            is_logged_in: self.auth.is_logged_in,
            role: self.auth.role,
            screen: self.active().screen_label(),
        }
    }
}
