//! Assessment scheduling form and its success overlay.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;

use super::error::FlowError;
use super::field::FormField;
use super::notice::SuccessNotice;
use super::validation::{self, DAY, HOUR, MINUTE, MONTH, YEAR};

/// Employers that have authorised the candidate to take an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Company {
    #[default]
    Microsoft,
    Google,
    Amazon,
    Facebook1,
    Facebook2,
}

impl Company {
    pub const ALL: [Company; 5] = [
        Company::Microsoft,
        Company::Google,
        Company::Amazon,
        Company::Facebook1,
        Company::Facebook2,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Company::Microsoft => "microsoft",
            Company::Google => "google",
            Company::Amazon => "amazon",
            Company::Facebook1 => "facebook1",
            Company::Facebook2 => "facebook2",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Company::Microsoft => "Microsoft",
            Company::Google => "Google",
            Company::Amazon => "Amazon",
            Company::Facebook1 | Company::Facebook2 => "Facebook",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|company| company.id().eq_ignore_ascii_case(id.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Country {
    #[default]
    India,
    UnitedStates,
    UnitedKingdom,
}

impl Country {
    pub const ALL: [Country; 3] = [Country::India, Country::UnitedStates, Country::UnitedKingdom];

    pub const fn label(self) -> &'static str {
        match self {
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Meridiem {
    #[default]
    Am,
    Pm,
}

impl Meridiem {
    pub const fn label(self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

pub const TESTING_CENTRES: [&str; 2] = ["Centre 1", "Centre 2"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleScreen {
    Form,
    Success,
}

impl ScheduleScreen {
    pub const fn label(self) -> &'static str {
        match self {
            ScheduleScreen::Form => "schedule",
            ScheduleScreen::Success => "schedule success",
        }
    }
}

/// Raw inputs of the scheduling form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleForm {
    pub company: Company,
    pub country: Country,
    pub zip_code: FormField,
    pub testing_centre: FormField,
    pub month: FormField,
    pub day: FormField,
    pub year: FormField,
    pub hour: FormField,
    pub minute: FormField,
    pub meridiem: Meridiem,
}

impl Default for ScheduleForm {
    fn default() -> Self {
        Self {
            company: Company::default(),
            country: Country::default(),
            zip_code: FormField::new("zip code"),
            testing_centre: FormField::new("testing centre"),
            month: FormField::new("month"),
            day: FormField::new("day"),
            year: FormField::new("year"),
            hour: FormField::new("hour"),
            minute: FormField::new("minute"),
            meridiem: Meridiem::default(),
        }
    }
}

impl ScheduleForm {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            &self.month,
            &self.day,
            &self.year,
            &self.hour,
            &self.minute,
            &self.zip_code,
            &self.testing_centre,
        ]
        .into_iter()
        .filter(|field| field.is_blank())
        .map(FormField::name)
        .collect()
    }

    /// Check every field and build the confirmed booking.
    pub fn validate(&self) -> Result<ScheduleRecord, FlowError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(FlowError::MissingFields { fields: missing });
        }

        validation::numeric_range(MONTH, self.month.value())?;
        validation::numeric_range(DAY, self.day.value())?;
        validation::numeric_range(YEAR, self.year.value())?;
        validation::numeric_range(HOUR, self.hour.value())?;
        validation::numeric_range(MINUTE, self.minute.value())?;
        validation::zip_code(self.zip_code.value())?;

        Ok(ScheduleRecord {
            company: self.company,
            country: self.country,
            zip_code: self.zip_code.trimmed().to_string(),
            testing_centre: self.testing_centre.trimmed().to_string(),
            date: format!(
                "{:0>2}/{:0>2}/{}",
                self.month.trimmed(),
                self.day.trimmed(),
                self.year.trimmed()
            ),
            time: format!(
                "{:0>2}:{:0>2} {}",
                self.hour.trimmed(),
                self.minute.trimmed(),
                self.meridiem.label()
            ),
            confirmed_at: Utc::now(),
        })
    }

    /// Clears the slot fields after a booking while keeping the employer and country.
    fn clear_slot(&mut self) {
        self.month.clear();
        self.day.clear();
        self.year.clear();
        self.hour.clear();
        self.minute.clear();
        self.meridiem = Meridiem::Am;
        self.zip_code.clear();
        self.testing_centre.clear();
    }
}

/// A booked assessment slot. Dates are range-checked per field only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleRecord {
    pub company: Company,
    pub country: Country,
    pub zip_code: String,
    pub testing_centre: String,
    pub date: String,
    pub time: String,
    pub confirmed_at: DateTime<Utc>,
}

impl ScheduleRecord {
    pub fn summary(&self) -> String {
        format!(
            "Your assessment with {} has been scheduled for {} at {} at {}.",
            self.company.id().to_uppercase(),
            self.date,
            self.time,
            self.testing_centre
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleFlow {
    screen: ScheduleScreen,
    form: ScheduleForm,
    confirmation: Option<ScheduleRecord>,
}

impl Default for ScheduleFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl ScheduleFlow {
    pub fn new() -> Self {
        Self {
            screen: ScheduleScreen::Form,
            form: ScheduleForm::default(),
            confirmation: None,
        }
    }

    pub fn screen(&self) -> ScheduleScreen {
        self.screen
    }

    pub fn form(&self) -> &ScheduleForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> Result<&mut ScheduleForm, FlowError> {
        match self.screen {
            ScheduleScreen::Form => Ok(&mut self.form),
            ScheduleScreen::Success => Err(FlowError::invalid(self.screen.label(), "edit")),
        }
    }

    pub fn confirmation(&self) -> Option<&ScheduleRecord> {
        self.confirmation.as_ref()
    }

    pub fn notice(&self) -> Option<SuccessNotice> {
        match (self.screen, &self.confirmation) {
            (ScheduleScreen::Success, Some(record)) => {
                Some(SuccessNotice::assessment_scheduled(record.summary()))
            }
            _ => None,
        }
    }

    pub fn submit(&mut self) -> Result<&ScheduleRecord, FlowError> {
        if self.screen != ScheduleScreen::Form {
            return Err(FlowError::invalid(self.screen.label(), "submit"));
        }

        let record = self.form.validate()?;
        info!(
            company = record.company.id(),
            date = %record.date,
            time = %record.time,
            "assessment scheduled"
        );
        self.screen = ScheduleScreen::Success;
        Ok(self.confirmation.insert(record))
    }

    pub fn continue_after_success(&mut self) -> Result<(), FlowError> {
        if self.screen != ScheduleScreen::Success {
            return Err(FlowError::invalid(self.screen.label(), "continue"));
        }

        self.form.clear_slot();
        self.screen = ScheduleScreen::Form;
        Ok(())
    }
}
