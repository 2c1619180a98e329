//! Employer registration followed by the profile, assessment request, and candidate tabs.

use serde::Serialize;
use std::str::FromStr;
use tracing::info;

use super::error::{FieldIssue, FlowError};
use super::field::FormField;
use super::notice::SuccessNotice;
use super::validation::{self, PhonePolicy, ValidationError};
use super::verification::VerificationChannel;

/// Answer to "Are you authorized to pay?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentAuthorization {
    Yes,
    No,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Department {
    #[default]
    HumanResources,
    Engineering,
    Marketing,
    Sales,
    Finance,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::HumanResources,
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Finance,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Department::HumanResources => "Human Resources",
            Department::Engineering => "Engineering",
            Department::Marketing => "Marketing",
            Department::Sales => "Sales",
            Department::Finance => "Finance",
        }
    }
}

impl FromStr for Department {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(value.trim()))
            .ok_or(ValidationError::Required {
                field: "department",
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerScreen {
    Registration,
    Success,
    Profile,
    AssessmentRequest,
    Candidates,
}

impl EmployerScreen {
    pub const fn label(self) -> &'static str {
        match self {
            EmployerScreen::Registration => "employer registration",
            EmployerScreen::Success => "employer registration success",
            EmployerScreen::Profile => "profile",
            EmployerScreen::AssessmentRequest => "assessment request",
            EmployerScreen::Candidates => "candidate list",
        }
    }

    pub const fn is_tab(self) -> bool {
        matches!(
            self,
            EmployerScreen::Profile | EmployerScreen::AssessmentRequest | EmployerScreen::Candidates
        )
    }
}

/// Tabs reachable once registration completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployerTab {
    Profile,
    AssessmentRequest,
    Candidates,
}

impl From<EmployerTab> for EmployerScreen {
    fn from(tab: EmployerTab) -> Self {
        match tab {
            EmployerTab::Profile => EmployerScreen::Profile,
            EmployerTab::AssessmentRequest => EmployerScreen::AssessmentRequest,
            EmployerTab::Candidates => EmployerScreen::Candidates,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerRegistration {
    pub first_name: FormField,
    pub last_name: FormField,
    pub company: FormField,
    pub email: VerificationChannel,
    pub phone: VerificationChannel,
    pub authorized: Option<PaymentAuthorization>,
    pub authorization_details: FormField,
    pub department: Department,
}

impl Default for EmployerRegistration {
    fn default() -> Self {
        Self {
            first_name: FormField::new("first name"),
            last_name: FormField::new("last name"),
            company: FormField::new("company"),
            email: VerificationChannel::email(),
            phone: VerificationChannel::phone(PhonePolicy::ExactlyTenDigits),
            authorized: None,
            authorization_details: FormField::new("authorization details"),
            department: Department::default(),
        }
    }
}

impl EmployerRegistration {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Details are only asked for, and only required, when the answer is yes.
    pub fn requires_authorization_details(&self) -> bool {
        self.authorized == Some(PaymentAuthorization::Yes)
    }

    pub fn validate(&self) -> Result<EmployerRecord, FlowError> {
        let mut issues = Vec::new();

        for field in [&self.first_name, &self.last_name, &self.company] {
            if let Err(err) = validation::required_text(field.name(), field.value()) {
                issues.push(FieldIssue::new(field.name(), &err));
            }
        }
        if let Err(err) = self.email.check_address() {
            issues.push(FieldIssue::new("email", &err));
        }
        if !self.email.is_verified() {
            issues.push(FieldIssue::new(
                "email otp",
                &ValidationError::Required { field: "email OTP" },
            ));
        }
        if let Err(err) = self.phone.check_address() {
            issues.push(FieldIssue::new("phone", &err));
        }
        if !self.phone.is_verified() {
            issues.push(FieldIssue::new(
                "phone otp",
                &ValidationError::Required { field: "phone OTP" },
            ));
        }
        if self.requires_authorization_details() {
            if let Err(err) = validation::required_text(
                "authorization details",
                self.authorization_details.value(),
            ) {
                issues.push(FieldIssue::new("authorization details", &err));
            }
        }

        if !issues.is_empty() {
            return Err(FlowError::Incomplete { issues });
        }

        Ok(EmployerRecord {
            first_name: self.first_name.trimmed().to_string(),
            last_name: self.last_name.trimmed().to_string(),
            company: self.company.trimmed().to_string(),
            email: self.email.address().trim().to_string(),
            phone: self.phone.address().trim().to_string(),
            authorized: self.authorized,
            authorization_details: self
                .requires_authorization_details()
                .then(|| self.authorization_details.trimmed().to_string()),
            department: self.department,
        })
    }
}

/// Completed employer registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerRecord {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub authorized: Option<PaymentAuthorization>,
    pub authorization_details: Option<String>,
    pub department: Department,
}

/// `Registration -> Success -> Profile`, then free movement between the three tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployerFlow {
    screen: EmployerScreen,
    registration: EmployerRegistration,
    record: Option<EmployerRecord>,
}

impl Default for EmployerFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployerFlow {
    pub fn new() -> Self {
        Self {
            screen: EmployerScreen::Registration,
            registration: EmployerRegistration::default(),
            record: None,
        }
    }

    pub fn screen(&self) -> EmployerScreen {
        self.screen
    }

    pub fn registration(&self) -> &EmployerRegistration {
        &self.registration
    }

    pub fn registration_mut(&mut self) -> Result<&mut EmployerRegistration, FlowError> {
        match self.screen {
            EmployerScreen::Registration => Ok(&mut self.registration),
            other => Err(FlowError::invalid(other.label(), "edit registration")),
        }
    }

    pub fn record(&self) -> Option<&EmployerRecord> {
        self.record.as_ref()
    }

    pub fn notice(&self) -> Option<SuccessNotice> {
        (self.screen == EmployerScreen::Success).then(SuccessNotice::employer_registered)
    }

    pub fn submit(&mut self) -> Result<&EmployerRecord, FlowError> {
        if self.screen != EmployerScreen::Registration {
            return Err(FlowError::invalid(self.screen.label(), "submit"));
        }

        let record = self.registration.validate()?;
        info!(
            department = record.department.label(),
            authorized = ?record.authorized,
            "employer registration accepted"
        );
        self.screen = EmployerScreen::Success;
        Ok(self.record.insert(record))
    }

    pub fn continue_to_profile(&mut self) -> Result<(), FlowError> {
        if self.screen != EmployerScreen::Success {
            return Err(FlowError::invalid(self.screen.label(), "continue"));
        }

        self.screen = EmployerScreen::Profile;
        Ok(())
    }

    pub fn navigate(&mut self, tab: EmployerTab) -> Result<(), FlowError> {
        if !self.screen.is_tab() {
            return Err(FlowError::invalid(self.screen.label(), "navigate"));
        }

        self.screen = tab.into();
        Ok(())
    }
}
