//! Sign-in, registration, and scheduling flows.
//!
//! Each flow is a small state machine owned by the orchestrator. Field checks
//! run on submit; a rejected submit returns a [`FlowError`] and leaves the
//! screen cursor where it was.

pub mod employee;
pub mod employer;
pub mod error;
pub mod field;
pub mod login;
pub mod notice;
pub mod orchestrator;
pub mod schedule;
pub mod validation;
pub mod verification;

#[cfg(test)]
mod tests;

pub use employee::{EmployeeFlow, EmployeeRecord, EmployeeRegistration, EmployeeScreen, ResumeUpload};
pub use employer::{
    Department, EmployerFlow, EmployerRecord, EmployerRegistration, EmployerScreen, EmployerTab,
    PaymentAuthorization,
};
pub use error::{FieldIssue, FlowError};
pub use field::FormField;
pub use login::{LoginForm, Role};
pub use notice::SuccessNotice;
pub use orchestrator::{ActiveFlow, FlowOrchestrator, SessionAuth, SessionSnapshot};
pub use schedule::{
    Company, Country, Meridiem, ScheduleFlow, ScheduleForm, ScheduleRecord, ScheduleScreen,
};
pub use validation::{FieldKind, NumericBounds, PhonePolicy, ValidationError};
pub use verification::{ChannelKind, VerificationChannel, VerificationError};
