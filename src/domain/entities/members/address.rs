//! 주소 엔티티

use crate::domain::value_objects::ValidationError;
use crate::utils::string_utils::{clean_optional_string, validate_required_string};
use super::States;

/// 회원 주소. Person에 임베드되며 필드 간 불변식은 없습니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    /// 임베드된 레코드 식별자 (저장 전에는 None)
    pub id: Option<String>,
    pub street_line1: String,
    pub street_line2: Option<String>,
    pub city: String,
    pub state: States,
    pub postal_code: String,
}

impl Address {
    /// 새 주소를 만듭니다.
    ///
    /// `street_line1`은 필수(앞뒤 공백 제거)이며, 공백뿐인 `street_line2`는 `None`으로 정리됩니다.
    pub fn new(
        street_line1: impl Into<String>,
        street_line2: Option<String>,
        city: impl Into<String>,
        state: States,
        postal_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            id: None,
            street_line1: validate_required_string(&street_line1.into(), "StreetLine1")?,
            street_line2: clean_optional_string(street_line2),
            city: city.into(),
            state,
            postal_code: postal_code.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_second_line_becomes_none() {
        let address = Address::new("1 Main St", Some("   ".to_string()), "Duluth", States::Minnesota, "55802")
            .unwrap();
        assert_eq!(address.street_line2, None);
        assert_eq!(address.id, None);
    }

    #[test]
    fn first_line_is_required() {
        let err = Address::new(" ", None, "Duluth", States::Minnesota, "55802").unwrap_err();
        assert_eq!(err.field(), "StreetLine1");
    }
}
