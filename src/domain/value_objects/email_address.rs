//! 이메일 주소 값 객체

use std::fmt;
use std::str::FromStr;
use validator::ValidateEmail;
use super::ValidationError;

/// 문법적으로 유효한 이메일 주소 (HTML5 / RFC 5322 기준, `validator` 크레이트 사용)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !value.validate_email() {
            let msg = format!("{} is not a valid email address", value);
            return Err(ValidationError::new("EmailAddress", msg));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EmailAddress {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_addresses() {
        for raw in ["alice@example.com", "first.last+tag@sub.example.org"] {
            let email = EmailAddress::new(raw).expect("valid email");
            assert_eq!(email.value(), raw);
        }
    }

    #[test]
    fn rejects_invalid_addresses() {
        for raw in ["", "plainaddress", "@example.com", "alice@", "a b@example.com"] {
            let err = EmailAddress::new(raw).expect_err("invalid email");
            assert_eq!(err.field(), "EmailAddress");
        }
    }
}
