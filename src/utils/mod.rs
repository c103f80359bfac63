//! 공통 유틸리티 함수 모듈
//! 
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{name_search_pattern, validate_required_string};
//! use crate::utils::display_terminal::print_roster;
//!
//! // 필수 주소 필드 검증
//! let street = validate_required_string("  742 Evergreen Terrace ", "StreetLine1")?;
//!
//! // 이름 검색어를 MongoDB `$regex`용으로 이스케이프
//! let pattern = name_search_pattern(" O'Brien (Jr.) ");
//!
//! // 활성 회원 명부 출력
//! print_roster("Active members", &members);
//! ```

pub mod string_utils;
pub mod display_terminal;
