//! # Domain Entities Module
//!
//! 멤버십 도메인의 핵심 엔티티들을 정의합니다.
//!
//! 엔티티는 값 객체로 구성된 **검증된 메모리 그래프**이며, MongoDB 문서와 직접 매핑되지 않습니다.
//! 저장 형태는 [`dto`](crate::domain::dto) 모듈의 평평한(flat) 레코드이고,
//! 두 형태 사이의 변환은 [`mappings`](crate::mappings) 모듈이 담당합니다.
//!
//! ```text
//! Domain Layer
//! ├── value_objects/  ← NamePart, DateOfBirth, DateOfMembership, EmailAddress
//! ├── entities/       ← 이 모듈 (Person, Relationship, Address, MembershipInformation)
//! └── dto/            ← 저장소용 평평한 레코드
//! ```
//!
//! ## 주의사항
//!
//! - **순환 참조 금지**: Relationship은 Person 전체가 아닌 식별자를 보관합니다.
//! - **식별자 캐시 없음**: 도메인 객체는 매 조회마다 평평한 레코드에서 새로 만들어집니다.

pub mod members;

pub use members::*;
