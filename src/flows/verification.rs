//! Simulated one-time passcode step for email and phone channels.
//!
//! No code is generated, delivered, stored, or compared. Requesting a code only
//! reveals the passcode input once the address looks valid, and any non-empty
//! passcode counts as verified. Replacing this with real verification is a
//! product decision, not a bug fix.

use serde::Serialize;
use tracing::debug;

use super::field::FormField;
use super::validation::{self, PhonePolicy, ValidationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "policy")]
pub enum ChannelKind {
    Email,
    Phone(PhonePolicy),
}

impl ChannelKind {
    pub const fn label(self) -> &'static str {
        match self {
            ChannelKind::Email => "email",
            ChannelKind::Phone(_) => "phone",
        }
    }

    fn check(self, address: &str) -> Result<(), ValidationError> {
        match self {
            ChannelKind::Email => validation::email(address),
            ChannelKind::Phone(policy) => validation::phone(policy, address),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VerificationError {
    #[error(transparent)]
    InvalidAddress(#[from] ValidationError),
    #[error("Please request an OTP for your {0} first")]
    CodeNotRequested(&'static str),
    #[error("Please enter the OTP sent to your {0}")]
    EmptyCode(&'static str),
}

/// Contact method put through the simulated passcode step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerificationChannel {
    kind: ChannelKind,
    address: FormField,
    otp_requested: bool,
    otp: FormField,
    verified: bool,
}

impl VerificationChannel {
    pub fn new(kind: ChannelKind) -> Self {
        let (address, otp) = match kind {
            ChannelKind::Email => ("email", "email otp"),
            ChannelKind::Phone(_) => ("phone", "phone otp"),
        };
        Self {
            kind,
            address: FormField::new(address),
            otp_requested: false,
            otp: FormField::new(otp),
            verified: false,
        }
    }

    pub fn email() -> Self {
        Self::new(ChannelKind::Email)
    }

    pub fn phone(policy: PhonePolicy) -> Self {
        Self::new(ChannelKind::Phone(policy))
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn address(&self) -> &str {
        self.address.value()
    }

    pub fn otp(&self) -> &str {
        self.otp.value()
    }

    pub fn otp_requested(&self) -> bool {
        self.otp_requested
    }

    pub fn is_verified(&self) -> bool {
        self.verified
    }

    /// Whether the "Get OTP" action should be enabled for the current address.
    pub fn can_request_code(&self) -> bool {
        self.kind.check(self.address.value()).is_ok()
    }

    pub fn set_address(&mut self, value: impl Into<String>) {
        self.address.set(value);
    }

    pub fn check_address(&self) -> Result<(), ValidationError> {
        self.kind.check(self.address.value())
    }

    pub fn request_code(&mut self) -> Result<(), VerificationError> {
        self.check_address()?;
        self.otp_requested = true;
        debug!(channel = self.kind.label(), "verification code requested");
        Ok(())
    }

    /// Accepts any non-empty passcode once a code was requested.
    pub fn submit_code(&mut self, code: impl Into<String>) -> Result<(), VerificationError> {
        if !self.otp_requested {
            return Err(VerificationError::CodeNotRequested(self.kind.label()));
        }

        self.otp.set(code);
        self.verified = !self.otp.is_blank();
        if self.verified {
            debug!(channel = self.kind.label(), "verification code accepted");
            Ok(())
        } else {
            Err(VerificationError::EmptyCode(self.kind.label()))
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.kind);
    }
}
