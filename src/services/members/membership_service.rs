//! # 멤버십 서비스 구현
//!
//! 리포지토리와 매핑 계층을 조합하여 회원 그래프 단위의 기능을 제공합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                       MembershipService                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────┐  │
//! │  │   Member Query  │  │  Graph Compose  │  │    Mutation     │  │
//! │  │                 │  │                 │  │                 │  │
//! │  │ • By ID         │  │ • Attach edges  │  │ • Save person   │  │
//! │  │ • Active/All    │  │ • Lazy join     │  │ • Save edges    │  │
//! │  │ • By name/type  │  │ • Group by from │  │ • Delete member │  │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//!                │                                  │
//!                ▼                                  ▼
//!      Arc<dyn PersonRepository>        Arc<dyn RelationshipRepository>
//! ```
//!
//! ## 조회 정책
//!
//! - 존재하지 않는 ID 조회는 에러가 아닙니다. [`MembershipService::get_person`]은
//!   빈 `Person`을, [`MembershipService::find_person`]은 `None`을 돌려줍니다.
//! - 관계는 Person 레코드에 포함되지 않으므로 두 번째 조회로 가져와 붙입니다.
//! - 손상된 레코드는 `AppError::ValidationError`로 드러나며 보정되지 않습니다.
//!
//! ## 저장 정책
//!
//! 저장은 트랜잭션이 아닙니다. Person 저장 후 관계 저장이 실패하면
//! 관계는 이전 상태로 남고 에러가 그대로 반환됩니다. 저장은 식별자 기준 upsert이므로
//! 호출자는 같은 Person으로 전체 작업을 다시 시도하면 됩니다.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::domain::dto::{PersonDto, RelationshipDto};
use crate::domain::entities::{MembershipType, Person, Relationship, RelationshipType};
use crate::domain::value_objects::ValidationError;
use crate::errors::AppResult;
use crate::mappings::relationships_from_records;
use crate::repositories::{DeleteOutcome, PersonRepository, RelationshipRepository};

/// 관계와 그 대상 회원
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedPerson {
    pub relationship: Relationship,
    /// 대상 회원. 대상의 관계 목록은 채워지지 않습니다.
    pub person: Person,
}

/// 회원 삭제 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemberDeletion {
    pub person: DeleteOutcome,
    /// 삭제된 소유 관계. 다른 회원이 이 회원을 가리키는 관계는 포함되지 않습니다.
    pub relationships: DeleteOutcome,
}

/// 멤버십 관리 서비스
///
/// 리포지토리는 생성 시 명시적으로 주입됩니다. 테스트에서는
/// [`InMemoryPersonRepository`](crate::repositories::InMemoryPersonRepository) 같은
/// 메모리 구현을 넣을 수 있습니다.
///
/// ```rust,ignore
/// let service = MembershipService::new(
///     Arc::new(MongoPersonRepository::new(db.clone(), "persons")),
///     Arc::new(MongoRelationshipRepository::new(db, "relationships")),
/// );
/// let members = service.get_all_active_members(&CancellationToken::new()).await?;
/// ```
pub struct MembershipService {
    person_repo: Arc<dyn PersonRepository>,
    relationship_repo: Arc<dyn RelationshipRepository>,
}

impl MembershipService {
    pub fn new(
        person_repo: Arc<dyn PersonRepository>,
        relationship_repo: Arc<dyn RelationshipRepository>,
    ) -> Self {
        Self {
            person_repo,
            relationship_repo,
        }
    }

    /// ID로 회원을 조회합니다. 없으면 빈 `Person`을 반환합니다.
    pub async fn get_person(&self, id: &str, token: &CancellationToken) -> AppResult<Person> {
        Ok(self.find_person(id, token).await?.unwrap_or_default())
    }

    /// ID로 회원을 조회합니다. 없으면 `None`.
    pub async fn find_person(&self, id: &str, token: &CancellationToken) -> AppResult<Option<Person>> {
        let Some(record) = self.person_repo.get_person_by_id(id, token).await? else {
            debug!("person {} 없음", id);
            return Ok(None);
        };

        let relationships = self.load_relationships(id, token).await?;
        Ok(Some(record.into_person(relationships)?))
    }

    pub async fn get_all_active_members(&self, token: &CancellationToken) -> AppResult<Vec<Person>> {
        self.get_all_members(false, token).await
    }

    /// 전체 회원을 조회합니다.
    ///
    /// 관계는 회원마다 순차적으로 한 번씩 조회합니다.
    pub async fn get_all_members(
        &self,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<Person>> {
        let start_time = Instant::now();

        let records = self.person_repo.get_all_persons(include_archived, token).await?;
        let mut persons = Vec::with_capacity(records.len());
        for record in records {
            let relationships = match record.id.as_deref() {
                Some(id) => self.load_relationships(id, token).await?,
                None => Vec::new(),
            };
            persons.push(record.into_person(relationships)?);
        }

        info!("회원 {}명 조회 took: {:?}", persons.len(), start_time.elapsed());
        Ok(persons)
    }

    /// 이름 또는 성에 `name`이 포함된 회원 (대소문자 무시)
    ///
    /// 관계는 검색된 회원 전체에 대해 한 번에 조회한 뒤 소유자별로 나눠 붙입니다.
    pub async fn get_persons_by_name(
        &self,
        name: &str,
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<Person>> {
        let records = self
            .person_repo
            .get_persons_by_name(name, include_archived, token)
            .await?;
        self.attach_batched(records, token).await
    }

    pub async fn get_members_by_membership_types(
        &self,
        types: &[MembershipType],
        include_archived: bool,
        token: &CancellationToken,
    ) -> AppResult<Vec<Person>> {
        let codes: Vec<i32> = types.iter().map(MembershipType::code).collect();
        let records = self
            .person_repo
            .get_persons_by_membership_types(&codes, include_archived, token)
            .await?;
        self.attach_batched(records, token).await
    }

    /// 회원이 소유한 관계 중 특정 타입만
    pub async fn get_relationships_by_type(
        &self,
        person_id: &str,
        relationship_type: RelationshipType,
        token: &CancellationToken,
    ) -> AppResult<Vec<Relationship>> {
        let records = self
            .relationship_repo
            .get_relationships_by_person_and_type(person_id, relationship_type.code(), token)
            .await?;
        Ok(relationships_from_records(records)?)
    }

    /// 관계의 `to` 끝점을 실제 회원으로 풀어냅니다.
    ///
    /// 대상은 한 번의 조회로 가져옵니다. 대상 레코드가 사라진 관계는 경고를 남기고 건너뜁니다.
    pub async fn get_related_persons(
        &self,
        person: &Person,
        token: &CancellationToken,
    ) -> AppResult<Vec<RelatedPerson>> {
        if person.relationships.is_empty() {
            return Ok(Vec::new());
        }

        let target_ids = unique_targets(&person.relationships);
        let targets: HashMap<String, PersonDto> = self
            .person_repo
            .get_persons_by_ids(&target_ids, token)
            .await?
            .into_iter()
            .filter_map(|record| record.id.clone().map(|id| (id, record)))
            .collect();

        let mut related = Vec::with_capacity(person.relationships.len());
        for relationship in &person.relationships {
            let Some(record) = targets.get(&relationship.to) else {
                warn!(
                    "person {}의 관계 {:?}가 존재하지 않는 person {}를 가리킴",
                    person.id_str(),
                    relationship.id,
                    relationship.to
                );
                continue;
            };
            related.push(RelatedPerson {
                relationship: relationship.clone(),
                person: record.clone().into_person(Vec::new())?,
            });
        }
        Ok(related)
    }

    /// 회원과 소유 관계를 저장합니다.
    ///
    /// 1. 관계 대상이 모두 존재하고 자기 자신이 아닌지 확인 (쓰기 전)
    /// 2. 회원 저장 (새 회원이면 ID 부여)
    /// 3. 각 관계의 `from`을 저장된 ID로 확정하고 관계 저장
    ///
    /// 반환값은 저장소가 부여한 ID와 저장 시각이 반영된 회원입니다.
    pub async fn save_person(&self, person: &Person, token: &CancellationToken) -> AppResult<Person> {
        let record = PersonDto::try_from(person)?;
        let target_ids = self.validate_outgoing(person, token).await?;

        let saved = self.person_repo.create_or_update_person(record, token).await?;
        let saved_id = saved.id.clone().unwrap_or_default();

        let edges: Vec<RelationshipDto> = person
            .relationships
            .iter()
            .map(|relationship| RelationshipDto {
                from: saved_id.clone(),
                ..RelationshipDto::from(relationship)
            })
            .collect();

        let saved_edges = match self
            .relationship_repo
            .create_or_update_relationships(edges, token)
            .await
        {
            Ok(saved_edges) => saved_edges,
            Err(e) => {
                warn!("person {} 저장 후 관계 저장 실패, 관계가 이전 상태로 남음: {}", saved_id, e);
                return Err(e);
            }
        };

        info!(
            "person {} 저장 완료 (관계 {}건, 대상 {}명)",
            saved_id,
            saved_edges.len(),
            target_ids.len()
        );
        Ok(saved.into_person(relationships_from_records(saved_edges)?)?)
    }

    /// 회원 레코드와 이 회원이 소유한 관계를 삭제합니다.
    ///
    /// 다른 회원이 이 회원을 가리키는 관계는 그대로 남습니다.
    pub async fn delete_member(
        &self,
        person: &Person,
        token: &CancellationToken,
    ) -> AppResult<MemberDeletion> {
        let record = PersonDto::try_from(person)?;
        let person_outcome = self.person_repo.delete_person(&record, token).await?;

        let relationship_ids = person.relationship_ids();
        let relationship_outcome = self
            .relationship_repo
            .delete_relationships(&relationship_ids, token)
            .await?;

        info!(
            "person {} 삭제 (person: {}, 관계: {}/{})",
            person.id_str(),
            person_outcome.deleted_count,
            relationship_outcome.deleted_count,
            relationship_ids.len()
        );
        Ok(MemberDeletion {
            person: person_outcome,
            relationships: relationship_outcome,
        })
    }

    async fn load_relationships(
        &self,
        person_id: &str,
        token: &CancellationToken,
    ) -> AppResult<Vec<Relationship>> {
        let records = self
            .relationship_repo
            .get_relationships_for_person(person_id, token)
            .await?;
        Ok(relationships_from_records(records)?)
    }

    async fn attach_batched(
        &self,
        records: Vec<PersonDto>,
        token: &CancellationToken,
    ) -> AppResult<Vec<Person>> {
        let ids: Vec<String> = records.iter().filter_map(|r| r.id.clone()).collect();
        let edges = self
            .relationship_repo
            .get_relationships_for_persons(&ids, token)
            .await?;

        let mut by_owner: HashMap<String, Vec<Relationship>> = HashMap::new();
        for relationship in relationships_from_records(edges)? {
            by_owner
                .entry(relationship.from.clone())
                .or_default()
                .push(relationship);
        }

        let mut persons = Vec::with_capacity(records.len());
        for record in records {
            let relationships = record
                .id
                .as_ref()
                .and_then(|id| by_owner.remove(id))
                .unwrap_or_default();
            persons.push(record.into_person(relationships)?);
        }
        Ok(persons)
    }

    /// 저장 전 관계 끝점 검증. 확인된 대상 ID 목록을 반환합니다.
    async fn validate_outgoing(
        &self,
        person: &Person,
        token: &CancellationToken,
    ) -> AppResult<Vec<String>> {
        for relationship in &person.relationships {
            if relationship.to.is_empty() {
                return Err(ValidationError::new("Relationship", "related person id is required").into());
            }
            if person.id.as_deref() == Some(relationship.to.as_str()) {
                let msg = format!("person {} cannot be related to itself", relationship.to);
                return Err(ValidationError::new("Relationship", msg).into());
            }
            if !relationship.from.is_empty() && !relationship.is_owned_by(person.id_str()) {
                let msg = format!("relationship from {} is not owned by this person", relationship.from);
                return Err(ValidationError::new("Relationship", msg).into());
            }
        }

        let target_ids = unique_targets(&person.relationships);
        if target_ids.is_empty() {
            return Ok(target_ids);
        }

        let found: HashSet<String> = self
            .person_repo
            .get_persons_by_ids(&target_ids, token)
            .await?
            .into_iter()
            .filter_map(|record| record.id)
            .collect();

        if let Some(missing) = target_ids.iter().find(|id| !found.contains(*id)) {
            let msg = format!("related person {} does not exist", missing);
            return Err(ValidationError::new("Relationship", msg).into());
        }
        Ok(target_ids)
    }
}

/// 중복을 제거한 `to` 끝점 (첫 등장 순서 유지)
fn unique_targets(relationships: &[Relationship]) -> Vec<String> {
    let mut seen = HashSet::new();
    relationships
        .iter()
        .filter(|r| seen.insert(r.to.as_str()))
        .map(|r| r.to.clone())
        .collect()
}
