//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 멤버십 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 API 계층이
//! 검증 실패, 조회 실패, 저장소 장애를 서로 다른 응답 코드로 매핑할 수 있게 합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::{AppError, AppResult};
//!
//! async fn load(repo: &dyn PersonRepository, id: &str, token: &CancellationToken) -> AppResult<PersonDto> {
//!     repo.get_person_by_id(id, token)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound(format!("person {}", id)))
//! }
//! ```

use thiserror::Error;
use crate::domain::value_objects::ValidationError;

/// 애플리케이션 전역 에러 타입
///
/// 값 객체 검증 실패는 필드명과 메시지를 그대로 보존한 채 전파됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 또는 저장된 레코드의 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 서비스 계층은 조회 실패를 빈 Person으로 돌려주므로 이 변형을 만들지 않습니다.
    /// [`MembershipService::find_person`](crate::services::members::MembershipService::find_person)의
    /// `None`을 응답으로 바꾸는 API 계층용입니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 호출자가 작업을 취소함 (503 Service Unavailable)
    #[error("Operation cancelled")]
    Cancelled,

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 검증 에러인 경우 실패한 필드명을 반환합니다.
    pub fn validation_field(&self) -> Option<&str> {
        match self {
            AppError::ValidationError(e) => Some(e.field()),
            _ => None,
        }
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Cancelled => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러의 경우 어떤 필드가 실패했는지 `field` 키로 함께 내려줍니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(e) => serde_json::json!({
                "error": self.to_string(),
                "field": e.field(),
            }),
            _ => serde_json::json!({
                "error": self.to_string()
            }),
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
