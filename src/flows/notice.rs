use serde::Serialize;

/// Copy for the success interstitial shown between screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessNotice {
    pub title: &'static str,
    pub message: String,
    pub button_text: &'static str,
}

impl SuccessNotice {
    pub fn employee_registered() -> Self {
        Self {
            title: "Registration Successful!",
            message: "Your employee account has been created successfully. You can now proceed to schedule your assessment.".to_string(),
            button_text: "Continue to Assessment",
        }
    }

    pub fn employer_registered() -> Self {
        Self {
            title: "Registration Successful!",
            message: "Your employer account has been created successfully. You can now access all employer features.".to_string(),
            button_text: "Continue to Profile",
        }
    }

    pub fn assessment_scheduled(summary: String) -> Self {
        Self {
            title: "Assessment Scheduled Successfully!",
            message: summary,
            button_text: "Continue",
        }
    }
}
