//! MongoDB 연결 관리
//!
//! 클라이언트 생성과 연결 확인(ping)을 담당합니다.
//! 리포지토리는 `Arc<Database>`를 공유하여 같은 커넥션 풀을 사용합니다.

use mongodb::{Client, Collection, options::ClientOptions};
use log::info;

use crate::config::DatabaseConfig;
use crate::errors::{AppResult, ErrorContext};

#[derive(Clone)]
pub struct Database {
    client: Client,
    database_name: String,
}

impl Database {
    /// 설정값으로 연결하고 ping으로 연결을 확인합니다.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(&config.uri)
            .await
            .with_context(|| format!("MongoDB URI 파싱 실패: {}", config.uri))?;

        client_options.app_name = Some("membership_service".to_string());

        let client = Client::with_options(client_options)
            .context("MongoDB 클라이언트 생성 실패")?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.get_database().collection::<T>(name)
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
