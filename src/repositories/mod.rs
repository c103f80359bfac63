//! # Repository Layer
//!
//! 저장 레코드(DTO)에 대한 영속성 계약과 그 구현들입니다.
//!
//! ## 구조
//!
//! ```text
//! repositories/
//! ├── mod.rs                     # PersonRepository, RelationshipRepository trait
//! ├── members/
//! │   ├── person_repo.rs         # MongoDB `persons` 컬렉션
//! │   └── relationship_repo.rs   # MongoDB `relationships` 컬렉션
//! └── in_memory.rs               # 테스트/로컬용 메모리 구현
//! ```
//!
//! ## 계약
//!
//! - 모든 메서드는 [`CancellationToken`]을 받습니다. 토큰이 취소되면
//!   진행 중인 I/O를 포기하고 [`AppError::Cancelled`]를 반환합니다.
//! - 단건 조회 실패는 에러가 아니라 `Ok(None)`입니다.
//! - `include_archived == false` 이면 `membership_information.is_active == false` 인
//!   회원은 모든 다건 조회에서 제외됩니다.
//! - 저장은 식별자 기준 upsert이므로 같은 레코드를 다시 저장해도 안전합니다.
//!
//! 서비스는 구체 타입이 아닌 `Arc<dyn PersonRepository>` 형태로 주입받습니다.

use std::future::Future;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::dto::{PersonDto, RelationshipDto};
use crate::errors::{AppError, AppResult};

pub mod members;
pub mod in_memory;

pub use members::{MongoPersonRepository, MongoRelationshipRepository};
pub use in_memory::{InMemoryPersonRepository, InMemoryRelationshipRepository};

/// 삭제 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteOutcome {
    /// 저장소가 요청을 확인했는지 여부
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteOutcome {
    pub fn acknowledged(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// 회원 레코드 저장소
#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// 식별자 기준 upsert.
    ///
    /// 식별자가 없으면 새로 부여하고, 임베드된 주소/멤버십 정보에도
    /// 식별자가 없으면 부여합니다. `updated`는 저장 시각으로 기록됩니다.
    /// 반환값은 실제로 저장된 레코드입니다.
    async fn create_or_update_person(
        &self,
        person: PersonDto,
        token: &CancellationToken,
    ) -> AppResult<PersonDto>;

    async fn get_person_by_id(
        &self,
        id: &str,
        token: &CancellationToken,
    ) -> AppResult<Option<PersonDto>>;

    /// 존재하는 레코드만 반환합니다 (순서 보장 없음, 보관 회원 포함).
    async fn get_persons_by_ids(
        &self,
        ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>>;

    async fn get_all_persons(
        &self,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>>;

    /// `membership_type` 코드가 `types` 중 하나인 회원
    async fn get_persons_by_membership_types(
        &self,
        types: &[i32],
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>>;

    /// 이름 또는 성에 `name`이 대소문자 구분 없이 포함된 회원
    async fn get_persons_by_name(
        &self,
        name: &str,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>>;

    async fn delete_person(
        &self,
        person: &PersonDto,
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome>;
}

/// 관계 레코드 저장소
///
/// 관계는 소유자(`from`) 기준으로 조회됩니다.
#[async_trait]
pub trait RelationshipRepository: Send + Sync {
    async fn create_or_update_relationship(
        &self,
        relationship: RelationshipDto,
        token: &CancellationToken,
    ) -> AppResult<RelationshipDto>;

    /// 순서대로 저장합니다. 중간에 실패하면 앞서 저장된 레코드는 남습니다.
    async fn create_or_update_relationships(
        &self,
        relationships: Vec<RelationshipDto>,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>>;

    async fn get_relationship_by_id(
        &self,
        id: &str,
        token: &CancellationToken,
    ) -> AppResult<Option<RelationshipDto>>;

    async fn get_relationships_for_person(
        &self,
        person_id: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>>;

    /// 여러 소유자의 관계를 한 번에 조회합니다.
    async fn get_relationships_for_persons(
        &self,
        person_ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>>;

    async fn get_relationships_by_person_and_type(
        &self,
        person_id: &str,
        relationship_type: i32,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>>;

    async fn delete_relationship(
        &self,
        relationship: &RelationshipDto,
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome>;

    async fn delete_relationships(
        &self,
        ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome>;
}

/// 저장소 future를 취소 토큰과 경쟁시킵니다.
///
/// 이미 취소된 토큰이면 future를 폴링하지 않습니다.
pub(crate) async fn cancellable<T, F>(token: &CancellationToken, fut: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    tokio::select! {
        biased;
        _ = token.cancelled() => Err(AppError::Cancelled),
        result = fut => result,
    }
}

/// 메모리 구현처럼 I/O가 없는 경로의 취소 확인
pub(crate) fn ensure_not_cancelled(token: &CancellationToken) -> AppResult<()> {
    if token.is_cancelled() {
        return Err(AppError::Cancelled);
    }
    Ok(())
}
