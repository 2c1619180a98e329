use super::common::*;
use crate::flows::employee::{EmployeeFlow, EmployeeScreen, ResumeUpload};
use crate::flows::error::FlowError;
use crate::flows::validation::ValidationError;

fn flow_with(registration: crate::flows::employee::EmployeeRegistration) -> EmployeeFlow {
    let mut flow = EmployeeFlow::new();
    *flow.registration_mut().expect("registration editable") = registration;
    flow
}

#[test]
fn complete_registration_reaches_success_interstitial() {
    let mut flow = flow_with(filled_employee_registration());

    let record = flow.submit().expect("registration accepted");
    assert_eq!(record.first_name, "Priya");
    assert_eq!(record.resume.content_type, "application/pdf");
    assert_eq!(flow.screen(), EmployeeScreen::Success);

    let notice = flow.notice().expect("success notice shown");
    assert_eq!(notice.title, "Registration Successful!");
    assert_eq!(notice.button_text, "Continue to Assessment");

    flow.continue_to_assessment().expect("continue allowed");
    assert_eq!(flow.screen(), EmployeeScreen::Assessment);
    assert!(flow.notice().is_none());
    assert!(flow.schedule().is_some());
}

#[test]
fn invalid_submit_keeps_cursor_on_registration() {
    let mut registration = filled_employee_registration();
    registration.last_name.set("   ");
    registration.email.set_address("priya.example.com");
    let mut flow = flow_with(registration);

    match flow.submit() {
        Err(FlowError::Incomplete { issues }) => {
            let fields: Vec<_> = issues.iter().map(|issue| issue.field).collect();
            assert_eq!(fields, vec!["last name", "email"]);
        }
        other => panic!("expected incomplete registration, got {other:?}"),
    }
    assert_eq!(flow.screen(), EmployeeScreen::Registration);
    assert!(flow.record().is_none());
}

#[test]
fn unverified_channels_and_missing_resume_are_reported() {
    let mut flow = EmployeeFlow::new();
    let registration = flow.registration_mut().expect("editable");
    registration.first_name.set("Sam");
    registration.last_name.set("Lee");
    registration.email.set_address("sam@lee.dev");
    registration.phone.set_address("0123456789");

    let err = flow.submit().expect_err("otp and resume missing");
    assert_eq!(
        err.fields(),
        vec!["email otp", "phone otp", "resume"],
        "only the missing verification steps and resume are flagged"
    );
    assert_eq!(
        err.to_string(),
        "Please fill in all fields correctly before submitting"
    );
}

#[test]
fn resume_must_be_pdf_or_word_document() {
    assert!(ResumeUpload::from_file_name("cv.DOCX").is_ok());
    assert_eq!(
        ResumeUpload::from_file_name("cv.doc")
            .expect("doc accepted")
            .content_type,
        "application/msword"
    );
    assert_eq!(
        ResumeUpload::from_file_name("portrait.png"),
        Err(ValidationError::UnsupportedUpload {
            file_name: "portrait.png".to_string()
        })
    );
    assert!(ResumeUpload::from_file_name("no-extension").is_err());
}

#[test]
fn back_preserves_registration_fields() {
    let mut flow = flow_with(filled_employee_registration());
    flow.submit().expect("accepted");
    flow.continue_to_assessment().expect("continue");

    flow.back().expect("back from assessment");
    assert_eq!(flow.screen(), EmployeeScreen::Registration);
    assert!(flow.schedule().is_none());
    assert_eq!(flow.registration().first_name.value(), "Priya");
    assert!(flow.registration().email.is_verified());
}

#[test]
fn transitions_are_rejected_from_the_wrong_screen() {
    let mut flow = EmployeeFlow::new();
    assert!(matches!(
        flow.continue_to_assessment(),
        Err(FlowError::InvalidTransition { action: "continue", .. })
    ));
    assert!(flow.back().is_err());
    assert!(flow.schedule_mut().is_err());

    let mut flow = flow_with(filled_employee_registration());
    flow.submit().expect("accepted");
    assert!(flow.registration_mut().is_err());
    assert!(flow.submit().is_err());
    assert_eq!(flow.screen(), EmployeeScreen::Success);
}

#[test]
fn reset_clears_every_field() {
    let mut flow = flow_with(filled_employee_registration());
    let registration = flow.registration_mut().expect("editable");
    registration.reset();

    assert!(registration.first_name.value().is_empty());
    assert!(!registration.email.otp_requested());
    assert!(registration.resume().is_none());
}
