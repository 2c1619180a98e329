use crate::flows::employee::EmployeeRegistration;
use crate::flows::employer::{EmployerRegistration, PaymentAuthorization};
use crate::flows::orchestrator::FlowOrchestrator;
use crate::flows::schedule::{Meridiem, ScheduleForm};

pub(super) fn filled_employee_registration() -> EmployeeRegistration {
    let mut registration = EmployeeRegistration::default();
    registration.first_name.set("Priya");
    registration.last_name.set("Raman");
    registration.email.set_address("priya.raman@example.com");
    registration.email.request_code().expect("email otp requested");
    registration.email.submit_code("482913").expect("email otp accepted");
    registration.phone.set_address("98450 12345");
    registration.phone.request_code().expect("phone otp requested");
    registration.phone.submit_code("1111").expect("phone otp accepted");
    registration
        .attach_resume("priya-raman-cv.pdf")
        .expect("pdf resume accepted");
    registration
}

pub(super) fn filled_employer_registration(
    authorized: Option<PaymentAuthorization>,
) -> EmployerRegistration {
    let mut registration = EmployerRegistration::default();
    registration.first_name.set("Michael");
    registration.last_name.set("Donovan");
    registration.company.set("Global Systems");
    registration.email.set_address("m.donovan@globalsystems.io");
    registration.email.request_code().expect("email otp requested");
    registration.email.submit_code("000000").expect("email otp accepted");
    registration.phone.set_address("2065550147");
    registration.phone.request_code().expect("phone otp requested");
    registration.phone.submit_code("42").expect("phone otp accepted");
    registration.authorized = authorized;
    registration
}

pub(super) fn fill_schedule(form: &mut ScheduleForm) {
    form.month.set("3");
    form.day.set("5");
    form.year.set("2025");
    form.hour.set("14");
    form.minute.set("30");
    form.meridiem = Meridiem::Pm;
    form.zip_code.set("560001");
    form.testing_centre.set("Centre 1");
}

pub(super) fn signed_in_employee() -> FlowOrchestrator {
    let mut orchestrator = FlowOrchestrator::new();
    let form = orchestrator.login_form_mut();
    form.email.set("priya.raman@example.com");
    form.password.set("correct horse");
    orchestrator.submit_login().expect("employee signs in");
    orchestrator
}
