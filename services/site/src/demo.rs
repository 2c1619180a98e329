use crate::infra::parse_role;
use clap::Args;
use skillkwiz::content::TESTIMONIALS;
use skillkwiz::error::AppError;
use skillkwiz::flows::{
    Department, EmployeeRegistration, EmployerRegistration, EmployerTab, FlowError,
    FlowOrchestrator, Meridiem, PaymentAuthorization, Role, ScheduleForm, SuccessNotice,
};
use skillkwiz::widgets::{Carousel, StatsBoard};

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Role to sign in as (employee or employer)
    #[arg(long, default_value = "employee", value_parser = parse_role)]
    pub(crate) role: Role,
    /// Submit each form incomplete first to show the rejection notices
    #[arg(long)]
    pub(crate) invalid: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { role, invalid } = args;

    println!("SkillKwiz flow demo");
    render_home_widgets();

    let mut orchestrator = FlowOrchestrator::new();
    print_screen(&orchestrator);

    {
        let form = orchestrator.login_form_mut();
        form.email.set(match role {
            Role::Employee => "priya.raman@example.com",
            Role::Employer => "m.donovan@globalsystems.io",
        });
        form.role = role;
    }
    if invalid {
        report_rejection(orchestrator.submit_login().map(|_| ()));
    }
    orchestrator.login_form_mut().password.set("demo-password");
    orchestrator.submit_login()?;
    print_screen(&orchestrator);

    match role {
        Role::Employee => employee_walkthrough(&mut orchestrator, invalid),
        Role::Employer => employer_walkthrough(&mut orchestrator, invalid),
    }
}

fn render_home_widgets() {
    let mut stats = StatsBoard::default();
    stats.finish();
    let line: Vec<String> = stats
        .snapshot()
        .into_iter()
        .map(|stat| format!("{} {}", stat.text, stat.label))
        .collect();
    println!("Home page stats: {}", line.join(" | "));

    if let Ok(carousel) = Carousel::new(TESTIMONIALS.len()) {
        let window = carousel.window();
        println!(
            "Testimonials on screen: {} | {} | {}",
            TESTIMONIALS[window.previous].name,
            TESTIMONIALS[window.active].name,
            TESTIMONIALS[window.next].name
        );
    }
}

fn employee_walkthrough(orchestrator: &mut FlowOrchestrator, invalid: bool) -> Result<(), AppError> {
    if invalid {
        report_rejection(orchestrator.employee_mut()?.submit().map(|_| ()));
    }

    fill_employee(orchestrator.employee_mut()?.registration_mut()?)?;
    let record = orchestrator.employee_mut()?.submit()?.clone();
    println!(
        "- Registered {} {} <{}> with resume {} ({})",
        record.first_name,
        record.last_name,
        record.email,
        record.resume.file_name,
        record.resume.content_type
    );
    print_screen(orchestrator);
    print_notice(orchestrator.employee_mut()?.notice());

    orchestrator.employee_mut()?.continue_to_assessment()?;
    print_screen(orchestrator);

    let schedule = orchestrator.employee_mut()?.schedule_mut()?;
    fill_schedule(schedule.form_mut()?);
    if invalid {
        schedule.form_mut()?.month.set("13");
        report_rejection(schedule.submit().map(|_| ()));
        schedule.form_mut()?.month.set("3");
    }
    let confirmation = schedule.submit()?.clone();
    println!(
        "- Booked {} at {} on {} {} (confirmed {})",
        confirmation.company.label(),
        confirmation.testing_centre,
        confirmation.date,
        confirmation.time,
        confirmation
            .confirmed_at
            .to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    );
    print_screen(orchestrator);
    let schedule = orchestrator.employee_mut()?.schedule_mut()?;
    print_notice(schedule.notice());
    schedule.continue_after_success()?;
    print_screen(orchestrator);
    Ok(())
}

fn employer_walkthrough(orchestrator: &mut FlowOrchestrator, invalid: bool) -> Result<(), AppError> {
    {
        let registration = orchestrator.employer_mut()?.registration_mut()?;
        fill_employer(registration)?;
        if invalid {
            registration.authorized = Some(PaymentAuthorization::Yes);
        }
    }
    if invalid {
        report_rejection(orchestrator.employer_mut()?.submit().map(|_| ()));
        orchestrator
            .employer_mut()?
            .registration_mut()?
            .authorization_details
            .set("Corporate card ending 4421");
    }

    let record = orchestrator.employer_mut()?.submit()?.clone();
    println!(
        "- Registered {} {} for {} ({})",
        record.first_name,
        record.last_name,
        record.company,
        record.department.label()
    );
    if let Some(details) = &record.authorization_details {
        println!("  Payment authorization: {details}");
    }
    print_screen(orchestrator);
    print_notice(orchestrator.employer_mut()?.notice());

    orchestrator.employer_mut()?.continue_to_profile()?;
    print_screen(orchestrator);
    for tab in [EmployerTab::AssessmentRequest, EmployerTab::Candidates, EmployerTab::Profile] {
        orchestrator.employer_mut()?.navigate(tab)?;
        print_screen(orchestrator);
    }
    Ok(())
}

fn fill_employee(registration: &mut EmployeeRegistration) -> Result<(), FlowError> {
    registration.first_name.set("Priya");
    registration.last_name.set("Raman");
    registration.email.set_address("priya.raman@example.com");
    registration.email.request_code()?;
    registration.email.submit_code("482913")?;
    registration.phone.set_address("9845012345");
    registration.phone.request_code()?;
    registration.phone.submit_code("1111")?;
    registration.attach_resume("priya-raman-cv.pdf")?;
    Ok(())
}

fn fill_employer(registration: &mut EmployerRegistration) -> Result<(), FlowError> {
    registration.first_name.set("Michael");
    registration.last_name.set("Donovan");
    registration.company.set("Global Systems");
    registration.email.set_address("m.donovan@globalsystems.io");
    registration.email.request_code()?;
    registration.email.submit_code("000000")?;
    registration.phone.set_address("2065550147");
    registration.phone.request_code()?;
    registration.phone.submit_code("42")?;
    registration.authorized = Some(PaymentAuthorization::No);
    registration.department = Department::Engineering;
    Ok(())
}

fn fill_schedule(form: &mut ScheduleForm) {
    form.month.set("3");
    form.day.set("5");
    form.year.set("2025");
    form.hour.set("2");
    form.minute.set("30");
    form.meridiem = Meridiem::Pm;
    form.zip_code.set("560001");
    form.testing_centre.set("Centre 1");
}

fn print_screen(orchestrator: &FlowOrchestrator) {
    println!("\nScreen: {}", orchestrator.snapshot().screen);
}

fn print_notice(notice: Option<SuccessNotice>) {
    if let Some(notice) = notice {
        println!("  {}", notice.title);
        println!("  {}", notice.message);
        println!("  [{}]", notice.button_text);
    }
}

fn report_rejection(result: Result<(), FlowError>) {
    let err = match result {
        Ok(()) => {
            println!("  Unexpectedly accepted");
            return;
        }
        Err(err) => err,
    };

    match &err {
        FlowError::Incomplete { issues } => {
            println!("  Rejected: {err}");
            for issue in issues {
                println!("    - {}: {}", issue.field, issue.message);
            }
        }
        FlowError::MissingFields { fields } => {
            println!("  Rejected: {err} ({})", fields.join(", "));
        }
        _ => println!("  Rejected: {err}"),
    }
}
