//! # Value Objects Module
//!
//! 단일 원시값을 감싸는 자기 검증(self-validating) 값 객체들입니다.
//! 생성 시점에 검증을 통과한 경우에만 인스턴스가 만들어지며,
//! 한 번 만들어진 값 객체는 불변이고 절대 유효하지 않은 상태가 될 수 없습니다.
//!
//! | 값 객체 | 원시 타입 | 규칙 |
//! |---------|-----------|------|
//! | [`NamePart`] | `String` | 비어있지 않고 `[A-Za-z ,.'-]` 문자만 허용 |
//! | [`DateOfBirth`] | `NaiveDate` | 오늘 이후(미래) 날짜 불가 |
//! | [`DateOfMembership`] | `NaiveDate` | 오늘 이후(미래) 날짜 불가 |
//! | [`EmailAddress`] | `String` | 문법적으로 유효한 이메일 |
//!
//! 검증 실패 시 필드명과 사람이 읽을 수 있는 메시지를 담은 [`ValidationError`]를 반환합니다.
//!
//! ```rust,ignore
//! let name = NamePart::new("O'Brien")?;
//! assert_eq!(name.value(), "O'Brien");
//!
//! let err = NamePart::new("Bob3").unwrap_err();
//! assert_eq!(err.field(), "NamePart");
//! ```

use chrono::NaiveDate;
use thiserror::Error;

pub mod name_part;
pub mod date_of_birth;
pub mod date_of_membership;
pub mod email_address;

pub use name_part::NamePart;
pub use date_of_birth::DateOfBirth;
pub use date_of_membership::DateOfMembership;
pub use email_address::EmailAddress;

/// 값 객체 또는 엔티티 검증 실패
///
/// `field`는 실패한 값 객체의 타입명(`NamePart` 등) 또는 엔티티 필드명입니다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// 검증에 실패한 필드명
    pub fn field(&self) -> &str {
        &self.field
    }

    /// 사람이 읽을 수 있는 실패 사유
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 현재 로컬 날짜
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `date`가 `today`보다 엄격하게 뒤인 경우 실패합니다. 오늘은 유효합니다.
pub(crate) fn ensure_not_future(
    date: NaiveDate,
    today: NaiveDate,
    field: &str,
    message: &str,
) -> Result<NaiveDate, ValidationError> {
    if date > today {
        return Err(ValidationError::new(field, message));
    }
    Ok(date)
}
