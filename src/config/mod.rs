//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 데이터베이스, 로그 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 기본값을 제공합니다.
//! 데이터베이스 이름과 로그 필터가 환경에 따라 달라집니다.
//!
//! ### 2. 안전한 기본값
//!
//! 모든 설정값은 기본값을 가지므로 로컬 MongoDB만 있으면 바로 실행됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{DatabaseConfig, Environment, LogConfig};
//!
//! let env = Environment::current();
//! let db = DatabaseConfig::from_env();
//! println!("{:?} → {}/{}", env, db.uri, db.database_name);
//!
//! env_logger::Builder::from_env(
//!     env_logger::Env::default().default_filter_or(LogConfig::default_filter()),
//! ).init();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! export ENVIRONMENT="development"          # development, test, staging, production
//! export PROFILE="dev"                     # .env.dev / .env.prod 선택
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="membership_dev"
//! export PERSON_COLLECTION="persons"
//! export RELATIONSHIP_COLLECTION="relationships"
//! export RUST_LOG="info"                   # 기본 필터 덮어쓰기
//! ```

pub mod data_config;

pub use data_config::*;
