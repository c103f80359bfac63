//! 생년월일 값 객체

use std::fmt;
use chrono::NaiveDate;
use super::{ensure_not_future, today, ValidationError};

/// 생년월일. 미래 날짜일 수 없습니다 (오늘은 허용).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateOfBirth(NaiveDate);

impl DateOfBirth {
    pub fn new(value: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_as_of(value, today())
    }

    /// 주어진 `today` 기준으로 검증합니다.
    pub fn new_as_of(value: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        ensure_not_future(value, today, "DateOfBirth", "Date of birth cannot be in the future")
            .map(Self)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for DateOfBirth {
    type Error = ValidationError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DateOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn today_is_valid() {
        let today = today();
        let dob = DateOfBirth::new(today).expect("today is not in the future");
        assert_eq!(dob.value(), today);
    }

    #[test]
    fn tomorrow_is_rejected() {
        let tomorrow = today().checked_add_days(Days::new(1)).unwrap();
        let err = DateOfBirth::new(tomorrow).expect_err("future date");
        assert_eq!(err.field(), "DateOfBirth");
        assert_eq!(err.message(), "Date of birth cannot be in the future");
    }

    #[test]
    fn checks_against_supplied_today() {
        let today = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let past = NaiveDate::from_ymd_opt(1985, 7, 14).unwrap();
        let future = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();

        assert_eq!(DateOfBirth::new_as_of(past, today).unwrap().into_inner(), past);
        assert!(DateOfBirth::new_as_of(today, today).is_ok());
        assert!(DateOfBirth::new_as_of(future, today).is_err());
    }
}
