//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 리포지토리 trait 객체를 생성자로 주입받습니다.
//! 전역 레지스트리나 싱글톤 없이 호출자가 조립합니다.
//!
//! # Features
//!
//! - 회원 그래프 조회 및 관계 조립
//! - 회원/관계 저장과 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::members::MembershipService;
//!
//! let service = MembershipService::new(
//!     Arc::new(InMemoryPersonRepository::new()),
//!     Arc::new(InMemoryRelationshipRepository::new()),
//! );
//! ```

pub mod members;
