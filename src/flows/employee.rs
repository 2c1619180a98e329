//! Employee registration and the assessment screen that follows it.

use serde::Serialize;
use std::path::Path;
use tracing::info;

use super::error::{FieldIssue, FlowError};
use super::field::FormField;
use super::notice::SuccessNotice;
use super::schedule::ScheduleFlow;
use super::validation::{self, PhonePolicy, ValidationError};
use super::verification::VerificationChannel;

const RESUME_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Reference to a resume picked on the registration screen. Only the name is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content_type: String,
}

impl ResumeUpload {
    pub fn from_file_name(file_name: &str) -> Result<Self, ValidationError> {
        let file_name = file_name.trim();
        let accepted = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| {
                RESUME_EXTENSIONS
                    .iter()
                    .any(|allowed| ext.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);

        if !accepted {
            return Err(ValidationError::UnsupportedUpload {
                file_name: file_name.to_string(),
            });
        }

        let content_type = mime_guess::from_path(file_name)
            .first_or_octet_stream()
            .essence_str()
            .to_string();

        Ok(Self {
            file_name: file_name.to_string(),
            content_type,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeScreen {
    Registration,
    Success,
    Assessment,
}

impl EmployeeScreen {
    pub const fn label(self) -> &'static str {
        match self {
            EmployeeScreen::Registration => "employee registration",
            EmployeeScreen::Success => "employee registration success",
            EmployeeScreen::Assessment => "employee assessment",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRegistration {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: VerificationChannel,
    pub phone: VerificationChannel,
    resume: Option<ResumeUpload>,
}

impl Default for EmployeeRegistration {
    fn default() -> Self {
        Self {
            first_name: FormField::new("first name"),
            last_name: FormField::new("last name"),
            email: VerificationChannel::email(),
            phone: VerificationChannel::phone(PhonePolicy::AtLeastTen),
            resume: None,
        }
    }
}

impl EmployeeRegistration {
    pub fn attach_resume(&mut self, file_name: &str) -> Result<&ResumeUpload, ValidationError> {
        let upload = ResumeUpload::from_file_name(file_name)?;
        Ok(self.resume.insert(upload))
    }

    pub fn resume(&self) -> Option<&ResumeUpload> {
        self.resume.as_ref()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<EmployeeRecord, FlowError> {
        let mut issues = Vec::new();

        if let Err(err) = validation::required_text("first name", self.first_name.value()) {
            issues.push(FieldIssue::new("first name", &err));
        }
        if let Err(err) = validation::required_text("last name", self.last_name.value()) {
            issues.push(FieldIssue::new("last name", &err));
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

        let resume = match &self.resume {
            Some(resume) => Some(resume.clone()),
            None => {
                issues.push(FieldIssue::new(
                    "resume",
                    &ValidationError::Required { field: "resume" },
                ));
                None
            }
        };

        match resume {
            Some(resume) if issues.is_empty() => Ok(EmployeeRecord {
                first_name: self.first_name.trimmed().to_string(),
                last_name: self.last_name.trimmed().to_string(),
                email: self.email.address().trim().to_string(),
                phone: self.phone.address().trim().to_string(),
                resume,
            }),
            _ => Err(FlowError::Incomplete { issues }),
        }
    }
}

/// Completed employee registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub resume: ResumeUpload,
}

/// `Registration -> Success -> Assessment`, with `back` from the assessment screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeFlow {
    screen: EmployeeScreen,
    registration: EmployeeRegistration,
    record: Option<EmployeeRecord>,
    schedule: Option<ScheduleFlow>,
}

impl Default for EmployeeFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeFlow {
    pub fn new() -> Self {
        Self {
            screen: EmployeeScreen::Registration,
            registration: EmployeeRegistration::default(),
            record: None,
            schedule: None,
        }
    }

    pub fn screen(&self) -> EmployeeScreen {
        self.screen
    }

    pub fn registration(&self) -> &EmployeeRegistration {
        &self.registration
    }

    pub fn registration_mut(&mut self) -> Result<&mut EmployeeRegistration, FlowError> {
        match self.screen {
            EmployeeScreen::Registration => Ok(&mut self.registration),
            other => Err(FlowError::invalid(other.label(), "edit registration")),
        }
    }

    pub fn record(&self) -> Option<&EmployeeRecord> {
        self.record.as_ref()
    }

    pub fn notice(&self) -> Option<SuccessNotice> {
        (self.screen == EmployeeScreen::Success).then(SuccessNotice::employee_registered)
    }

    pub fn submit(&mut self) -> Result<&EmployeeRecord, FlowError> {
        if self.screen != EmployeeScreen::Registration {
            return Err(FlowError::invalid(self.screen.label(), "submit"));
        }

        let record = self.registration.validate()?;
        info!(resume = %record.resume.file_name, "employee registration accepted");
        self.screen = EmployeeScreen::Success;
        Ok(self.record.insert(record))
    }

    pub fn continue_to_assessment(&mut self) -> Result<(), FlowError> {
        if self.screen != EmployeeScreen::Success {
            return Err(FlowError::invalid(self.screen.label(), "continue"));
        }

        self.screen = EmployeeScreen::Assessment;
        self.schedule = Some(ScheduleFlow::new());
        Ok(())
    }

    /// Return to registration. Entered fields survive; the schedule form does not.
    pub fn back(&mut self) -> Result<(), FlowError> {
        if self.screen != EmployeeScreen::Assessment {
            return Err(FlowError::invalid(self.screen.label(), "back"));
        }

        self.screen = EmployeeScreen::Registration;
        self.schedule = None;
        Ok(())
    }

    pub fn schedule(&self) -> Option<&ScheduleFlow> {
        self.schedule.as_ref()
    }

    pub fn schedule_mut(&mut self) -> Result<&mut ScheduleFlow, FlowError> {
        let screen = self.screen;
        self.schedule
            .as_mut()
            .ok_or_else(|| FlowError::invalid(screen.label(), "schedule"))
    }
}
