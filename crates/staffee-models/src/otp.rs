//! One-time-password input.

use std::fmt;

pub const OTP_LENGTH: usize = 6;

/// A normalised six-digit verification code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpCode(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OtpError {
    WrongLength(usize),
    NonDigit(char),
}

impl fmt::Display for OtpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OtpError::WrongLength(len) => {
                write!(f, "Verification code must be {} digits, got {}", OTP_LENGTH, len)
            }
            OtpError::NonDigit(c) => write!(f, "Verification code contains invalid character '{}'", c),
        }
    }
}

impl std::error::Error for OtpError {}

impl OtpCode {
    /// Accepts typed or pasted input. Whitespace and `-` separators are
    /// dropped, then exactly six ASCII digits must remain.
    pub fn parse(input: &str) -> Result<Self, OtpError> {
        let mut digits = String::with_capacity(OTP_LENGTH);
        for c in input.chars() {
            if c.is_whitespace() || c == '-' {
                continue;
            }
            if !c.is_ascii_digit() {
                return Err(OtpError::NonDigit(c));
            }
            digits.push(c);
        }

        if digits.len() != OTP_LENGTH {
            return Err(OtpError::WrongLength(digits.len()));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
