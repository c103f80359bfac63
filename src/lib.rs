//! 멤버십 서비스 백엔드
//!
//! 조직의 회원 명부를 관리하는 Rust 서비스입니다.
//! 회원, 멤버십 상태, 회원 간 관계(부모, 조부모, 형제 등)를 MongoDB에 저장하고
//! 검증된 메모리 그래프로 복원합니다.
//!
//! # Features
//!
//! - **값 객체**: 생성 시 검증되는 이름, 생년월일, 가입일, 이메일
//! - **관계 그래프**: 소유자(`from`) 쪽에서만 보이는 방향성 관계
//! - **매핑 계층**: 도메인 그래프와 평평한 저장 레코드 간 정확한 왕복 변환
//! - **명시적 DI**: 리포지토리 trait 객체를 서비스에 직접 주입
//! - **취소 지원**: 모든 저장소 호출은 `CancellationToken`을 받음
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │    Services     │ ← 회원 그래프 조회/저장/삭제
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Mappings     │ ← flat record <-> domain
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (MongoDB / 메모리)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← persons, relationships 컬렉션
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use membership_service_backend::repositories::{InMemoryPersonRepository, InMemoryRelationshipRepository};
//! use membership_service_backend::services::members::MembershipService;
//!
//! let service = MembershipService::new(
//!     Arc::new(InMemoryPersonRepository::new()),
//!     Arc::new(InMemoryRelationshipRepository::new()),
//! );
//! let saved = service.save_person(&person, &token).await?;
//! let members = service.get_all_active_members(&token).await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod mappings;
pub mod repositories;
pub mod services;
pub mod utils;
