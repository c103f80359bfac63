//! 멤버십 서비스 부트스트랩
//!
//! 환경 설정과 로깅을 초기화하고 MongoDB에 연결한 뒤,
//! 리포지토리와 서비스를 조립하여 활성 회원 명부를 출력합니다.

use std::sync::Arc;

use dotenv::dotenv;
use env_logger::Env;
use log::info;
use tokio_util::sync::CancellationToken;

use membership_service_backend::config::{DatabaseConfig, Environment, LogConfig};
use membership_service_backend::db::Database;
use membership_service_backend::errors::AppResult;
use membership_service_backend::repositories::{MongoPersonRepository, MongoRelationshipRepository};
use membership_service_backend::services::members::MembershipService;
use membership_service_backend::utils::display_terminal::{
    print_boxed_title, print_roster, print_step_complete, print_step_start,
};

#[tokio::main]
async fn main() -> AppResult<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    print_boxed_title("Membership Service");
    info!("🚀 멤버십 서비스 시작중... (environment: {})", Environment::current().as_str());

    let config = DatabaseConfig::from_env();

    print_step_start(1, "Connecting to MongoDB");
    let database = Arc::new(Database::new(&config).await?);

    print_step_start(2, "Preparing collections");
    let person_repo = Arc::new(MongoPersonRepository::new(database.clone(), &config.person_collection));
    let relationship_repo = Arc::new(MongoRelationshipRepository::new(
        database.clone(),
        &config.relationship_collection,
    ));
    person_repo.create_indexes().await?;
    relationship_repo.create_indexes().await?;
    print_step_complete(2, "Indexes created", 2);

    // 리포지토리 명시적 주입
    let service = MembershipService::new(person_repo, relationship_repo);

    print_step_start(3, "Loading active members");
    let token = CancellationToken::new();
    let members = service.get_all_active_members(&token).await?;
    print_step_complete(3, "Active members loaded", members.len());

    print_roster(&format!("Active members ({})", database.database_name()), &members);
    Ok(())
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
/// 로그 필터가 이 파일의 값을 읽으므로 로거보다 먼저 실행되며, 결과는 터미널에 직접 출력합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => println!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => println!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 실행 환경별 기본 필터([`LogConfig::default_filter`])를 사용합니다.
///
/// ```bash
/// RUST_LOG=membership_service_backend::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or(LogConfig::default_filter()));
}
