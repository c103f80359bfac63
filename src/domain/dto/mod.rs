//! # Data Transfer Objects (DTO) Module
//!
//! 도메인 그래프의 **저장 형태**(flat record)를 정의하는 모듈입니다.
//!
//! ## 도메인 객체와의 차이
//!
//! | 도메인 | 저장 레코드 |
//! |--------|-------------|
//! | `NamePart`, `EmailAddress` 등 값 객체 | `String`, `NaiveDate` 원시값 |
//! | `MembershipType`, `RelationshipType`, `States` | `i32` 코드 |
//! | `Person.relationships` (임베드된 관계 목록) | 별도 컬렉션의 `RelationshipDto` |
//! | `Relationship.from` / `to` | person 식별자 문자열 |
//!
//! 저장 레코드는 검증되지 않은 원시 데이터이므로, 손상된 레코드는
//! 도메인으로 변환될 때 [`ValidationError`](crate::domain::value_objects::ValidationError)로 드러납니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! dto/
//! └── members/
//!     ├── person_dto.rs        # PersonDto, AddressDto, MembershipInformationDto
//!     └── relationship_dto.rs  # RelationshipDto
//! ```

pub mod members;

pub use members::*;
