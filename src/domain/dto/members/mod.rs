//! 멤버십 저장 레코드 모듈
//!
//! 문서 저장소(MongoDB)에 그대로 저장되는 평평한 레코드들입니다.
//! 열거형은 정수 코드로, 값 객체는 원시값으로 풀어서 저장합니다.

pub mod person_dto;
pub mod relationship_dto;

pub use person_dto::{AddressDto, MembershipInformationDto, PersonDto};
pub use relationship_dto::RelationshipDto;
