//! # 회원 리포지토리 구현
//!
//! `persons` 컬렉션에 대한 MongoDB 기반 [`PersonRepository`] 구현입니다.
//!
//! ## 특징
//!
//! - **문자열 식별자**: `_id`는 ObjectId의 16진수 문자열로 저장됩니다
//! - **upsert 저장**: 같은 레코드를 다시 저장해도 중복이 생기지 않습니다
//! - **보관 회원 필터**: `membership_information.is_active` 기준

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::debug;
use mongodb::{
    Collection, IndexModel,
    bson::{self, Document, doc, oid::ObjectId},
    options::IndexOptions,
};
use tokio_util::sync::CancellationToken;

use crate::db::Database;
use crate::domain::dto::PersonDto;
use crate::errors::{AppError, AppResult};
use crate::repositories::{DeleteOutcome, PersonRepository, cancellable};
use crate::utils::string_utils::name_search_pattern;

/// 회원 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// - `last_name`, `first_name` (이름 검색 및 정렬)
/// - `membership_information.is_active` + `membership_information.membership_type`
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let db = Arc::new(Database::new(&config).await?);
/// let repo = MongoPersonRepository::new(db, &config.person_collection);
/// repo.create_indexes().await?;
///
/// let token = CancellationToken::new();
/// let saved = repo.create_or_update_person(record, &token).await?;
/// let found = repo.get_persons_by_name("brien", false, &token).await?;
/// ```
pub struct MongoPersonRepository {
    db: Arc<Database>,
    collection_name: String,
}

impl MongoPersonRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<PersonDto> {
        self.db.collection::<PersonDto>(&self.collection_name)
    }

    async fn find_many(&self, filter: Document, token: &CancellationToken) -> AppResult<Vec<PersonDto>> {
        cancellable(token, async {
            let cursor = self.collection().find(filter).await.map_err(AppError::from)?;
            cursor.try_collect::<Vec<PersonDto>>().await.map_err(AppError::from)
        })
        .await
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다. 이미 존재하는 인덱스는 그대로 둡니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let name_index = IndexModel::builder()
            .keys(doc! { "last_name": 1, "first_name": 1 })
            .options(IndexOptions::builder()
                .name("last_first_name".to_string())
                .build())
            .build();

        let membership_index = IndexModel::builder()
            .keys(doc! {
                "membership_information.is_active": 1,
                "membership_information.membership_type": 1,
            })
            .options(IndexOptions::builder()
                .name("membership_active_type".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([name_index, membership_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// `include_archived == false` 이면 활성 회원 조건을 덧붙입니다.
fn with_archive_filter(mut filter: Document, include_archived: bool) -> Document {
    if !include_archived {
        filter.insert("membership_information.is_active", true);
    }
    filter
}

#[async_trait]
impl PersonRepository for MongoPersonRepository {
    async fn create_or_update_person(
        &self,
        mut person: PersonDto,
        token: &CancellationToken,
    ) -> AppResult<PersonDto> {
        let id = person
            .id
            .get_or_insert_with(|| ObjectId::new().to_hex())
            .clone();
        person
            .membership_information
            .id
            .get_or_insert_with(|| ObjectId::new().to_hex());
        person.address.id.get_or_insert_with(|| ObjectId::new().to_hex());
        person.updated = Some(bson::DateTime::now());

        let result = cancellable(token, async {
            self.collection()
                .replace_one(doc! { "_id": id.as_str() }, &person)
                .upsert(true)
                .await
                .map_err(AppError::from)
        })
        .await?;

        debug!(
            "person {} 저장 (matched: {}, upserted: {})",
            id,
            result.matched_count,
            result.upserted_id.is_some()
        );
        Ok(person)
    }

    async fn get_person_by_id(
        &self,
        id: &str,
        token: &CancellationToken,
    ) -> AppResult<Option<PersonDto>> {
        cancellable(token, async {
            self.collection()
                .find_one(id_filter(id))
                .await
                .map_err(|e| AppError::DatabaseError(e.to_string()))
        })
        .await
    }

    async fn get_persons_by_ids(
        &self,
        ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.find_many(doc! { "_id": { "$in": ids.to_vec() } }, token).await
    }

    async fn get_all_persons(
        &self,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        let persons = self
            .find_many(with_archive_filter(Document::new(), include_archived), token)
            .await?;
        debug!("전체 회원 조회: {}명 (archived 포함: {})", persons.len(), include_archived);
        Ok(persons)
    }

    async fn get_persons_by_membership_types(
        &self,
        types: &[i32],
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        if types.is_empty() {
            return Ok(Vec::new());
        }
        let filter = doc! { "membership_information.membership_type": { "$in": types.to_vec() } };
        self.find_many(with_archive_filter(filter, include_archived), token).await
    }

    async fn get_persons_by_name(
        &self,
        name: &str,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        let pattern = name_search_pattern(name);
        let filter = doc! {
            "$or": [
                { "first_name": { "$regex": pattern.as_str(), "$options": "i" } },
                { "last_name": { "$regex": pattern.as_str(), "$options": "i" } },
            ]
        };

        let persons = self.find_many(with_archive_filter(filter, include_archived), token).await?;
        debug!("이름 검색 '{}': {}명", name, persons.len());
        Ok(persons)
    }

    async fn delete_person(
        &self,
        person: &PersonDto,
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome> {
        let Some(id) = person.id.as_deref() else {
            debug!("저장되지 않은 person 삭제 요청 무시");
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
}

/// 식별자 조회 필터. 대소문자를 구분하지 않습니다.
///
/// 저장되는 `_id`는 소문자 16진수이므로 소문자로 바꾼 값도 함께 찾습니다.
fn id_filter(id: &str) -> Document {
    let id = id.trim();
    let lowered = id.to_ascii_lowercase();
    if lowered == id {
        doc! { "_id": id }
    } else {
        doc! { "_id": { "$in": [id, lowered] } }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_filter_matches_lowercase_hex_for_mixed_case_input() {
        assert_eq!(id_filter("65f0c0ffee0000000000a001"), doc! { "_id": "65f0c0ffee0000000000a001" });
        assert_eq!(
            id_filter(" 65F0C0FFEE0000000000A001 "),
            doc! { "_id": { "$in": ["65F0C0FFEE0000000000A001", "65f0c0ffee0000000000a001"] } }
        );
    }

    #[test]
    fn archive_filter_only_added_when_excluding() {
        let active_only = with_archive_filter(doc! { "x": 1 }, false);
        assert_eq!(active_only.get_bool("membership_information.is_active").unwrap(), true);

        let everyone = with_archive_filter(doc! { "x": 1 }, true);
        assert!(!everyone.contains_key("membership_information.is_active"));
        assert_eq!(everyone.get_i32("x").unwrap(), 1);
    }
}
