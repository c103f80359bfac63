//! 멤버십 관리 서비스 모듈
//!
//! 회원 그래프(회원 + 소유 관계) 단위의 조회, 저장, 삭제를 담당합니다.
//!
//! # Features
//!
//! - 회원 조회 (ID, 활성/전체, 이름 검색, 멤버십 타입)
//! - 관계 대상 회원 지연 조회 (lazy join)
//! - 회원과 관계 저장 (비트랜잭션)
//! - 회원 삭제 (소유 관계 포함)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MembershipService;
//!
//! let service = MembershipService::new(person_repo, relationship_repo);
//! let token = CancellationToken::new();
//! let person = service.get_person("65f0c0ffee0000000000a001", &token).await?;
//! if person.is_empty() {
//!     println!("회원 없음");
//! }
//! ```

pub mod membership_service;

pub use membership_service::{MemberDeletion, MembershipService, RelatedPerson};
