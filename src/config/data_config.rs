//! 데이터 및 실행 환경 설정 관리 모듈
//!
//! 데이터베이스 연결, 컬렉션 이름, 로그 레벨 등 환경 변수 기반 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let env = Environment::current();
    /// match env {
    ///     Environment::Development => println!("개발 환경"),
    ///     Environment::Production => println!("프로덕션 환경"),
    ///     _ => {}
    /// }
    /// ```
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// # Arguments
    ///
    /// * `s` - 환경 이름 문자열 (대소문자 무관)
    ///
    /// # Returns
    ///
    /// 해당하는 Environment 값. 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Test => "test",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

/// MongoDB 연결 및 컬렉션 설정
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub person_collection: String,
    pub relationship_collection: String,
}

impl DatabaseConfig {
    pub const DEFAULT_URI: &'static str = "mongodb://localhost:27017";
    pub const DEFAULT_PERSON_COLLECTION: &'static str = "persons";
    pub const DEFAULT_RELATIONSHIP_COLLECTION: &'static str = "relationships";

    /// 환경 변수에서 설정을 읽습니다.
    ///
    /// # Environment Variables
    ///
    /// - `MONGODB_URI`: 기본값 `mongodb://localhost:27017`
    /// - `DATABASE_NAME`: 기본값은 실행 환경별 ([`DatabaseConfig::database_name_for_env`])
    /// - `PERSON_COLLECTION`: 기본값 `persons`
    /// - `RELATIONSHIP_COLLECTION`: 기본값 `relationships`
    pub fn from_env() -> Self {
        let environment = Environment::current();

        Self {
            uri: env::var("MONGODB_URI").unwrap_or_else(|_| Self::DEFAULT_URI.to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| Self::database_name_for_env(&environment).to_string()),
            person_collection: env::var("PERSON_COLLECTION")
                .unwrap_or_else(|_| Self::DEFAULT_PERSON_COLLECTION.to_string()),
            relationship_collection: env::var("RELATIONSHIP_COLLECTION")
                .unwrap_or_else(|_| Self::DEFAULT_RELATIONSHIP_COLLECTION.to_string()),
        }
    }

    /// 환경별 기본 데이터베이스 이름
    pub fn database_name_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "membership_dev",
            Environment::Test => "membership_test",
            Environment::Staging => "membership_staging",
            Environment::Production => "membership",
        }
    }
}

/// 로그 설정
pub struct LogConfig;

impl LogConfig {
    /// `RUST_LOG`가 없을 때 사용하는 기본 필터
    ///
    /// - Development: `debug` (MongoDB 드라이버는 `info`)
    /// - Test: `warn`
    /// - Staging/Production: `info`
    pub fn default_filter() -> &'static str {
        Self::default_filter_for_env(&Environment::current())
    }

    pub fn default_filter_for_env(env: &Environment) -> &'static str {
        match env {
            Environment::Development => "debug,mongodb=info",
            Environment::Test => "warn",
            Environment::Staging | Environment::Production => "info",
        }
    }
}
