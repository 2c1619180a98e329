//! Single-field checks shared by the registration, sign-in, and scheduling screens.
//!
//! Every check is pure: it inspects one raw input value and either passes or
//! returns the message the screen shows in its blocking notification.

use serde::Serialize;

/// Reason a single field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your {field}")]
    Required { field: &'static str },
    #[error("Please enter a valid email including '@'")]
    InvalidEmail,
    #[error("Please enter a valid phone number (at least {min} digits)")]
    PhoneTooShort { min: usize },
    #[error("Please enter a valid 10 digit phone number")]
    PhoneNotTenDigits,
    #[error("Please enter a valid {field} ({min}-{max})")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
    },
    #[error("Please enter a valid {field} (digits only)")]
    NotNumeric { field: &'static str },
    #[error("Please upload your resume as a PDF, DOC, or DOCX file (found '{file_name}')")]
    UnsupportedUpload { file_name: String },
}

/// Phone strictness differs between the two registration screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
    /// Employee registration: any value with at least ten characters.
    AtLeastTen,
    /// Employer registration: exactly ten digits.
    ExactlyTenDigits,
}

/// Inclusive bounds for a numeric form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericBounds {
    pub field: &'static str,
    pub min: i64,
    pub max: i64,
}

pub const MONTH: NumericBounds = NumericBounds {
    field: "month",
    min: 1,
    max: 12,
};
pub const DAY: NumericBounds = NumericBounds {
    field: "day",
    min: 1,
    max: 31,
};
pub const YEAR: NumericBounds = NumericBounds {
    field: "year",
    min: 2024,
    max: 2100,
};
pub const HOUR: NumericBounds = NumericBounds {
    field: "hour",
    min: 0,
    max: 23,
};
pub const MINUTE: NumericBounds = NumericBounds {
    field: "minute",
    min: 0,
    max: 59,
};

/// Semantic kind of a field, used when a caller wants to dispatch on the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    RequiredText { field: &'static str },
    Email,
    Phone(PhonePolicy),
    Numeric(NumericBounds),
    ZipCode,
}

pub fn validate(kind: FieldKind, value: &str) -> Result<(), ValidationError> {
    match kind {
        FieldKind::RequiredText { field } => required_text(field, value),
        FieldKind::Email => email(value),
        FieldKind::Phone(policy) => phone(policy, value),
        FieldKind::Numeric(bounds) => numeric_range(bounds, value).map(|_| ()),
        FieldKind::ZipCode => zip_code(value),
    }
}

pub fn required_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::Required { field })
    } else {
        Ok(())
    }
}

pub fn email(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() || !value.contains('@') {
        Err(ValidationError::InvalidEmail)
    } else {
        Ok(())
    }
}

pub fn phone(policy: PhonePolicy, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    match policy {
        PhonePolicy::AtLeastTen => {
            if trimmed.is_empty() || trimmed.chars().count() < 10 {
                Err(ValidationError::PhoneTooShort { min: 10 })
            } else {
                Ok(())
            }
        }
        PhonePolicy::ExactlyTenDigits => {
            // Checked untrimmed: surrounding spaces count toward the length.
            if value.len() == 10 && value.bytes().all(|b| b.is_ascii_digit()) {
                Ok(())
            } else {
                Err(ValidationError::PhoneNotTenDigits)
            }
        }
    }
}

/// Parse `value` as a whole number inside `bounds`, returning the number.
pub fn numeric_range(bounds: NumericBounds, value: &str) -> Result<i64, ValidationError> {
    let out_of_range = ValidationError::OutOfRange {
        field: bounds.field,
        min: bounds.min,
        max: bounds.max,
    };

    match value.trim().parse::<i64>() {
        Ok(number) if (bounds.min..=bounds.max).contains(&number) => Ok(number),
        _ => Err(out_of_range),
    }
}

pub fn zip_code(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required { field: "zip code" });
    }
    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(ValidationError::NotNumeric { field: "zip code" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_text_trims_before_checking() {
        assert!(required_text("first name", "  Ada ").is_ok());
        assert_eq!(
            required_text("first name", "   "),
            Err(ValidationError::Required {
                field: "first name"
            })
        );
    }

    #[test]
    fn email_needs_an_at_sign() {
        for candidate in ["plainaddress", "a.b.c", "name at example.com", " x "] {
            assert_eq!(email(candidate), Err(ValidationError::InvalidEmail));
        }
        assert_eq!(email(""), Err(ValidationError::InvalidEmail));
        assert!(email("hr@globalsystems.io").is_ok());
    }

    #[test]
    fn phone_policies_stay_divergent() {
        assert!(phone(PhonePolicy::AtLeastTen, "98765432101").is_ok());
        assert!(phone(PhonePolicy::AtLeastTen, "9876543210").is_ok());
        assert!(phone(PhonePolicy::AtLeastTen, "987654321").is_err());

        assert!(phone(PhonePolicy::ExactlyTenDigits, "9876543210").is_ok());
        assert_eq!(
            phone(PhonePolicy::ExactlyTenDigits, "98765432101"),
            Err(ValidationError::PhoneNotTenDigits)
        );
        assert_eq!(
            phone(PhonePolicy::ExactlyTenDigits, "98765-4321"),
            Err(ValidationError::PhoneNotTenDigits)
        );
    }

    #[test]
    fn employer_phone_is_not_trimmed() {
        assert_eq!(
            phone(PhonePolicy::ExactlyTenDigits, " 9876543210"),
            Err(ValidationError::PhoneNotTenDigits)
        );
        assert_eq!(
            phone(PhonePolicy::ExactlyTenDigits, "9876543210 "),
            Err(ValidationError::PhoneNotTenDigits)
        );
        assert!(phone(PhonePolicy::AtLeastTen, " 9876543210").is_ok());
    }

    #[test]
    fn digit_strings_follow_length_rules() {
        for len in 0..16 {
            let digits = "7".repeat(len);
            assert_eq!(phone(PhonePolicy::AtLeastTen, &digits).is_ok(), len >= 10);
            assert_eq!(
                phone(PhonePolicy::ExactlyTenDigits, &digits).is_ok(),
                len == 10
            );
        }
    }

    #[test]
    fn numeric_range_names_the_violated_field() {
        assert_eq!(numeric_range(MONTH, "12"), Ok(12));
        assert_eq!(numeric_range(YEAR, " 2024 "), Ok(2024));

        let err = numeric_range(MONTH, "13").expect_err("month 13 rejected");
        assert_eq!(err.to_string(), "Please enter a valid month (1-12)");

        let err = numeric_range(DAY, "abc").expect_err("non-numeric rejected");
        assert_eq!(err.to_string(), "Please enter a valid day (1-31)");

        let err = numeric_range(YEAR, "2101").expect_err("year past range");
        assert_eq!(err.to_string(), "Please enter a valid year (2024-2100)");

        assert!(numeric_range(HOUR, "0").is_ok());
        assert!(numeric_range(HOUR, "24").is_err());
        assert!(numeric_range(MINUTE, "59").is_ok());
        assert!(numeric_range(MINUTE, "-1").is_err());
    }

    #[test]
    fn zip_codes_are_digit_strings() {
        assert!(zip_code("560001").is_ok());
        assert_eq!(
            zip_code("56A001"),
            Err(ValidationError::NotNumeric { field: "zip code" })
        );
        assert_eq!(
            validate(FieldKind::ZipCode, ""),
            Err(ValidationError::Required { field: "zip code" })
        );
    }

    #[test]
    fn validate_dispatches_on_kind() {
        assert!(validate(FieldKind::Email, "a@b").is_ok());
        assert!(validate(FieldKind::Numeric(DAY), "31").is_ok());
        assert!(validate(FieldKind::Phone(PhonePolicy::AtLeastTen), "123").is_err());
        assert!(validate(FieldKind::RequiredText { field: "company" }, "Acme").is_ok());
    }
}
