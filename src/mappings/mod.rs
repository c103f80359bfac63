//! # Mapping Layer
//!
//! 도메인 그래프와 저장 레코드 사이의 순수 변환 (I/O 없음).
//!
//! ## 방향
//!
//! ```text
//! PersonDto ──into_person(relationships)──▶ Person
//! Person    ──TryFrom<&Person>────────────▶ PersonDto        (관계 제외)
//! RelationshipDto ◀──────────────────────▶ Relationship     (끝점은 식별자)
//! ```
//!
//! Person의 관계는 저장 레코드에 포함되지 않으므로, 읽기 경로에서는
//! 관계 컬렉션을 따로 조회한 뒤 `into_person`에 넘겨 붙입니다.
//!
//! ## 보장
//!
//! - 유효한 레코드는 `PersonDto → Person → PersonDto` 왕복 후 동일합니다.
//!   알 수 없는 열거형 코드도 `Unknown(code)`로 보존됩니다.
//! - 손상된 레코드는 [`ValidationError`](crate::domain::value_objects::ValidationError)로 실패하며
//!   절대 조용히 보정되지 않습니다.

pub mod members;
pub mod relationships;

pub use relationships::relationships_from_records;
