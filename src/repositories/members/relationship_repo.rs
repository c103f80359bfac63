//! # 관계 리포지토리 구현
//!
//! `relationships` 컬렉션에 대한 MongoDB 기반 [`RelationshipRepository`] 구현입니다.
//! 관계는 소유자(`from`) 기준으로만 조회되므로 `from` 인덱스가 핵심입니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    Collection, IndexModel,
    bson::{Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;
use crate::domain::dto::RelationshipDto;
use crate::errors::{AppError, AppResult};
use crate::repositories::{DeleteOutcome, RelationshipRepository, cancellable};

pub struct MongoRelationshipRepository {
    db: Arc<Database>,
    collection_name: String,
}

impl MongoRelationshipRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<RelationshipDto> {
        self.db.collection::<RelationshipDto>(&self.collection_name)
    }

    async fn find_many(
        &self,
        filter: Document,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        cancellable(token, async {
            let cursor = self.collection().find(filter).await.map_err(AppError::from)?;
            cursor.try_collect::<Vec<RelationshipDto>>().await.map_err(AppError::from)
        })
        .await
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// - `from` + `relationship_type`: 소유자별, 타입별 조회
    /// - `to`: 특정 회원을 가리키는 관계 점검용
    pub async fn create_indexes(&self) -> AppResult<()> {
        let owner_index = IndexModel::builder()
            .keys(doc! { "from": 1, "relationship_type": 1 })
            .options(IndexOptions::builder()
                .name("from_type".to_string())
                .build())
            .build();

        let target_index = IndexModel::builder()
            .keys(doc! { "to": 1 })
            .options(IndexOptions::builder()
                .name("to".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([owner_index, target_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl RelationshipRepository for MongoRelationshipRepository {
    async fn create_or_update_relationship(
        &self,
        mut relationship: RelationshipDto,
        token: &CancellationToken,
    ) -> AppResult<RelationshipDto> {
        let id = relationship
            .id
            .get_or_insert_with(|| ObjectId::new().to_hex())
            .clone();

        cancellable(token, async {
            self.collection()
                .replace_one(doc! { "_id": id.as_str() }, &relationship)
                .upsert(true)
                .await
                .map_err(AppError::from)
        })
        .await?;

        debug!(
            "relationship {} 저장 ({} -> {}, type {})",
            id, relationship.from, relationship.to, relationship.relationship_type
        );
        Ok(relationship)
    }

    async fn create_or_update_relationships(
        &self,
        relationships: Vec<RelationshipDto>,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        let mut saved = Vec::with_capacity(relationships.len());
        for relationship in relationships {
            saved.push(self.create_or_update_relationship(relationship, token).await?);
        }
        Ok(saved)
    }

    async fn get_relationship_by_id(
        &self,
        id: &str,
        token: &CancellationToken,
    ) -> AppResult<Option<RelationshipDto>> {
        cancellable(token, async {
            self.collection()
                .find_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    async fn get_relationships_for_person(
        &self,
        person_id: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        self.find_many(doc! { "from": person_id }, token).await
    }

    async fn get_relationships_for_persons(
        &self,
        person_ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        if person_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_many(doc! { "from": { "$in": person_ids.to_vec() } }, token).await
    }

    async fn get_relationships_by_person_and_type(
        &self,
        person_id: &str,
        relationship_type: i32,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        let filter = doc! { "from": person_id, "relationship_type": relationship_type };
        self.find_many(filter, token).await
    }

    async fn delete_relationship(
        &self,
        relationship: &RelationshipDto,
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome> {
        let Some(id) = relationship.id.as_deref() else {
            return Ok(DeleteOutcome::acknowledged(0));
        };

        let result = cancellable(token, async {
            self.collection()
                .delete_one(doc! { "_id": id })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await?;

        Ok(DeleteOutcome::acknowledged(result.deleted_count))
    }

    async fn delete_relationships(
        &self,
        ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome> {
        if ids.is_empty() {
            return Ok(DeleteOutcome::acknowledged(0));
        }

        let result = cancellable(token, async {
            self.collection()
                .delete_many(doc! { "_id": { "$in": ids.to_vec() } })
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await?;

        debug!("relationship {}건 삭제 요청, {}건 삭제", ids.len(), result.deleted_count);
        Ok(DeleteOutcome::acknowledged(result.deleted_count))
    }
}
