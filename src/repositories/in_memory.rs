//! 메모리 기반 리포지토리
//!
//! MongoDB 없이 서비스를 실행하거나 테스트할 때 사용합니다.
//! MongoDB 구현과 같은 계약(upsert, 보관 필터, 대소문자 무시 이름 검색)을 따르며,
//! `set_unavailable(true)`로 저장소 장애를 흉내낼 수 있습니다.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId};
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

use crate::domain::dto::{PersonDto, RelationshipDto};
use crate::errors::{AppError, AppResult};
use crate::repositories::{DeleteOutcome, PersonRepository, RelationshipRepository, ensure_not_cancelled};
use crate::utils::string_utils::contains_ignore_case;

fn new_id() -> String {
    ObjectId::new().to_hex()
}

fn check_available(unavailable: &AtomicBool, token: &CancellationToken) -> AppResult<()> {
    ensure_not_cancelled(token)?;
    if unavailable.load(Ordering::SeqCst) {
        return Err(AppError::DatabaseError("in-memory store unavailable".to_string()));
    }
    Ok(())
}

#[derive(Default)]
pub struct InMemoryPersonRepository {
    persons: RwLock<BTreeMap<String, PersonDto>>,
    unavailable: AtomicBool,
}

impl InMemoryPersonRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 호출이 `DatabaseError`로 실패하도록 합니다.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.persons.read().await.len()
    }

    async fn filtered<P>(&self, include_archived: bool, predicate: P) -> Vec<PersonDto>
    where
        P: Fn(&PersonDto) -> bool,
    {
        self.persons
            .read()
            .await
            .values()
            .filter(|p| include_archived || p.membership_information.is_active)
            .filter(|p| predicate(p))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl PersonRepository for InMemoryPersonRepository {
    async fn create_or_update_person(
        &self,
        mut person: PersonDto,
        token: &CancellationToken,
    ) -> AppResult<PersonDto> {
        check_available(&self.unavailable, token)?;

        let id = person.id.get_or_insert_with(new_id).clone();
        person.membership_information.id.get_or_insert_with(new_id);
        person.address.id.get_or_insert_with(new_id);
        person.updated = Some(bson::DateTime::now());

        self.persons.write().await.insert(id, person.clone());
        Ok(person)
    }

    async fn get_person_by_id(
        &self,
        id: &str,
        token: &CancellationToken,
    ) -> AppResult<Option<PersonDto>> {
        check_available(&self.unavailable, token)?;
        let persons = self.persons.read().await;
        let id = id.trim();
        // 식별자는 대소문자를 구분하지 않음
        let found = persons.get(id).or_else(|| {
            persons
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(id))
                .map(|(_, person)| person)
        });
        Ok(found.cloned())
    }

    async fn get_persons_by_ids(
        &self,
        ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        check_available(&self.unavailable, token)?;
        let persons = self.persons.read().await;
        Ok(ids.iter().filter_map(|id| persons.get(id).cloned()).collect())
    }

    async fn get_all_persons(
        &self,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        check_available(&self.unavailable, token)?;
        Ok(self.filtered(include_archived, |_| true).await)
    }

    async fn get_persons_by_membership_types(
        &self,
        types: &[i32],
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        check_available(&self.unavailable, token)?;
        Ok(self
            .filtered(include_archived, |p| types.contains(&p.membership_information.membership_type))
            .await)
    }

    async fn get_persons_by_name(
        &self,
        name: &str,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<PersonDto>> {
        check_available(&self.unavailable, token)?;
        let needle = name.trim();
        Ok(self
            .filtered(include_archived, |p| {
                contains_ignore_case(&p.first_name, needle) || contains_ignore_case(&p.last_name, needle)
            })
            .await)
    }

    async fn delete_person(
        &self,
        person: &PersonDto,
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome> {
        check_available(&self.unavailable, token)?;
        let removed = match person.id.as_deref() {
            Some(id) => self.persons.write().await.remove(id).is_some(),
            None => false,
        };
        Ok(DeleteOutcome::acknowledged(removed as u64))
    }
}

#[derive(Default)]
pub struct InMemoryRelationshipRepository {
    relationships: RwLock<BTreeMap<String, RelationshipDto>>,
    unavailable: AtomicBool,
}

impl InMemoryRelationshipRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 이후 모든 호출이 `DatabaseError`로 실패하도록 합니다.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub async fn len(&self) -> usize {
        self.relationships.read().await.len()
    }

    async fn filtered<P>(&self, predicate: P) -> Vec<RelationshipDto>
    where
        P: Fn(&RelationshipDto) -> bool,
    {
        self.relationships
            .read()
            .await
            .values()
            .filter(|r| predicate(r))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl RelationshipRepository for InMemoryRelationshipRepository {
    async fn create_or_update_relationship(
        &self,
        mut relationship: RelationshipDto,
        token: &CancellationToken,
    ) -> AppResult<RelationshipDto> {
        check_available(&self.unavailable, token)?;

        let id = relationship.id.get_or_insert_with(new_id).clone();
        self.relationships.write().await.insert(id, relationship.clone());
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
        check_available(&self.unavailable, token)?;
        Ok(self.relationships.read().await.get(id).cloned())
    }

    async fn get_relationships_for_person(
        &self,
        person_id: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        check_available(&self.unavailable, token)?;
        Ok(self.filtered(|r| r.from == person_id).await)
    }

    async fn get_relationships_for_persons(
        &self,
        person_ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        check_available(&self.unavailable, token)?;
        Ok(self.filtered(|r| person_ids.contains(&r.from)).await)
    }

    async fn get_relationships_by_person_and_type(
        &self,
        person_id: &str,
        relationship_type: i32,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelationshipDto>> {
        check_available(&self.unavailable, token)?;
        Ok(self
            .filtered(|r| r.from == person_id && r.relationship_type == relationship_type)
            .await)
    }

    async fn delete_relationship(
        &self,
        relationship: &RelationshipDto,
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome> {
        match relationship.id.as_deref() {
            Some(id) => self.delete_relationships(&[id.to_string()], token).await,
            None => {
                check_available(&self.unavailable, token)?;
                Ok(DeleteOutcome::acknowledged(0))
            }
        }
    }

    async fn delete_relationships(
        &self,
        ids: &[String],
        token: &CancellationToken,
    ) -> AppResult<DeleteOutcome> {
        check_available(&self.unavailable, token)?;
        let mut relationships = self.relationships.write().await;
        let deleted = ids.iter().filter(|id| relationships.remove(*id).is_some()).count();
        Ok(DeleteOutcome::acknowledged(deleted as u64))
    }
}
