//! 가입일 값 객체

use std::fmt;
use chrono::NaiveDate;
use super::{ensure_not_future, today, ValidationError};

/// 멤버십 가입일. 미래 날짜일 수 없습니다 (오늘은 허용).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateOfMembership(NaiveDate);

impl DateOfMembership {
    pub fn new(value: NaiveDate) -> Result<Self, ValidationError> {
        Self::new_as_of(value, today())
    }

    pub fn new_as_of(value: NaiveDate, today: NaiveDate) -> Result<Self, ValidationError> {
        ensure_not_future(
            value,
            today,
            "DateOfMembership",
            "Date of membership cannot be in the future",
        )
        .map(Self)
    }

    pub fn value(&self) -> NaiveDate {
        self.0
    }

    pub fn into_inner(self) -> NaiveDate {
        self.0
    }
}

impl TryFrom<NaiveDate> for DateOfMembership {
    type Error = ValidationError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DateOfMembership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Days;

    #[test]
    fn today_and_past_are_valid() {
        let today = today();
        let last_year = today.checked_sub_days(Days::new(365)).unwrap();

        assert!(DateOfMembership::new(today).is_ok());
        assert_eq!(DateOfMembership::try_from(last_year).unwrap().value(), last_year);
    }

    #[test]
    fn future_is_rejected() {
        let next_week = today().checked_add_days(Days::new(7)).unwrap();
        let err = DateOfMembership::new(next_week).expect_err("future date");
        assert_eq!(err.field(), "DateOfMembership");
    }
}
