//! 이름 구성 요소 값 객체

use std::fmt;
use std::str::FromStr;
use once_cell::sync::Lazy;
use regex::Regex;
use super::ValidationError;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z ,.'-]+$").expect("name part pattern must compile")
});

/// 이름 또는 성의 한 부분
///
/// 비어있지 않아야 하며 영문자, 공백, `,` `.` `'` `-` 만 허용합니다.
/// `O'Brien`, `Mary-Jane`, `St. John` 은 유효하고 `Bob3` 은 유효하지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamePart(String);

impl NamePart {
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if !NAME_REGEX.is_match(&value) {
            let msg = format!("{} is not a valid name part", value);
            return Err(ValidationError::new("NamePart", msg));
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

impl TryFrom<String> for NamePart {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for NamePart {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for NamePart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
