//! # Domain Layer Module
//!
//! 멤버십 도메인의 검증 규칙과 관계 그래프 모델을 담당하는 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── value_objects  - 자기 검증 값 객체 (NamePart, DateOfBirth, ...)
//! ├── entities       - 메모리 그래프 (Person, Relationship, ...)
//! └── dto            - 문서 저장소용 평평한 레코드
//!      │
//!      ▼
//! Mapping Layer (crate::mappings)  - flat <-> domain 변환
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 데이터 흐름
//!
//! ```text
//! 저장된 레코드 → mappings → 도메인 그래프 → 서비스 → mappings → 레코드 → 저장
//! ```
//!
//! ## 값 객체
//!
//! 값 객체는 생성 시 검증되며 유효하지 않은 인스턴스는 관찰될 수 없습니다.
//!
//! ```rust,ignore
//! use crate::domain::value_objects::{NamePart, DateOfBirth};
//!
//! let last = NamePart::new("O'Brien")?;           // Ok
//! let bad = NamePart::new("Bob3");                // Err(field = "NamePart")
//! let dob = DateOfBirth::new(today)?;              // 오늘은 유효
//! ```

pub mod value_objects;
pub mod entities;
pub mod dto;

pub use value_objects::*;
pub use entities::*;
pub use dto::*;
