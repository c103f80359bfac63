//! Person Entity Implementation
//!
//! 회원 그래프의 노드입니다. 값 객체로 구성된 개인 정보와
//! 이 Person이 소유한(`from` 쪽인) 관계 목록을 가집니다.

use chrono::{DateTime, SubsecRound, Utc};
use crate::domain::value_objects::{DateOfBirth, EmailAddress, NamePart, ValidationError};
use super::{Address, MembershipInformation, Relationship, RelationshipType};

/// 회원 엔티티
///
/// 저장소 조회 결과가 없을 때 서비스는 `Person::default()`(빈 Person)를 돌려줍니다.
/// 그래서 값 객체 필드들은 `Option`이며, [`Person::new`]로 만든 회원은 모두 `Some`입니다.
/// 빈 Person은 저장할 수 없습니다 (매핑 시 검증 에러).
///
/// ## 불변식
///
/// `relationships`에는 이 Person이 `from`인 관계만 들어갑니다.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Person {
    /// 저장소가 첫 저장 시 부여하는 식별자
    pub id: Option<String>,
    pub first_name: Option<NamePart>,
    pub last_name: Option<NamePart>,
    pub email: Option<EmailAddress>,
    pub date_of_birth: Option<DateOfBirth>,
    pub membership_information: Option<MembershipInformation>,
    pub address: Option<Address>,
    pub relationships: Vec<Relationship>,
    /// 생성 시각 (밀리초 정밀도)
    pub added_on: DateTime<Utc>,
    /// 마지막 저장 시각. 저장소가 기록합니다.
    pub updated_on: Option<DateTime<Utc>>,
}

impl Person {
    /// 아직 저장되지 않은 새 회원을 만듭니다.
    pub fn new(
        first_name: NamePart,
        last_name: NamePart,
        email: EmailAddress,
        date_of_birth: DateOfBirth,
        membership_information: MembershipInformation,
        address: Address,
    ) -> Self {
        Self {
            id: None,
            first_name: Some(first_name),
            last_name: Some(last_name),
            email: Some(email),
            date_of_birth: Some(date_of_birth),
            membership_information: Some(membership_information),
            address: Some(address),
            relationships: Vec::new(),
            // BSON DateTime과 동일한 정밀도로 맞춤
            added_on: Utc::now().trunc_subsecs(3),
            updated_on: None,
        }
    }

    /// 조회 실패 시 반환되는 빈 Person인지 확인
    pub fn is_empty(&self) -> bool {
        *self == Person::default()
    }

    /// 식별자 문자열. 저장되지 않은 경우 빈 문자열입니다.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    pub fn full_name(&self) -> String {
        let parts: Vec<&str> = [&self.first_name, &self.last_name]
            .into_iter()
            .flatten()
            .map(NamePart::value)
            .collect();
        parts.join(" ")
    }

    pub fn is_active(&self) -> bool {
        self.membership_information
            .as_ref()
            .is_some_and(|info| info.is_active)
    }

    /// 이 Person이 소유하는 관계를 추가합니다.
    ///
    /// `from`은 현재 식별자(저장 전이면 빈 문자열)로 채워지며 저장 시 확정됩니다.
    pub fn add_relationship(
        &mut self,
        to: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Result<&Relationship, ValidationError> {
        let relationship = Relationship::new(self.id_str(), to, relationship_type)?;
        self.relationships.push(relationship);
        Ok(&self.relationships[self.relationships.len() - 1])
    }

    /// 저장된 관계들의 식별자
    pub fn relationship_ids(&self) -> Vec<String> {
        self.relationships
            .iter()
            .filter_map(|r| r.id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::entities::members::{MembershipType, States};
    use crate::domain::value_objects::DateOfMembership;

    fn sample() -> Person {
        Person::new(
            NamePart::new("Ada").unwrap(),
            NamePart::new("Lovelace").unwrap(),
            EmailAddress::new("ada@example.com").unwrap(),
            DateOfBirth::new(NaiveDate::from_ymd_opt(1990, 12, 10).unwrap()).unwrap(),
            MembershipInformation::new(
                MembershipType::Full,
                DateOfMembership::new(NaiveDate::from_ymd_opt(2015, 1, 1).unwrap()).unwrap(),
                "founding member",
                true,
            ),
            Address::new("1 Main St", None, "Duluth", States::Minnesota, "55802").unwrap(),
        )
    }

    #[test]
    fn default_person_is_empty() {
        let person = Person::default();
        assert!(person.is_empty());
        assert!(person.relationships.is_empty());
        assert!(!person.is_active());
        assert_eq!(person.full_name(), "");
    }

    #[test]
    fn new_person_is_not_empty() {
        let person = sample();
        assert!(!person.is_empty());
        assert!(person.is_active());
        assert_eq!(person.full_name(), "Ada Lovelace");
        assert_eq!(person.added_on.timestamp_subsec_nanos() % 1_000_000, 0);
    }

    #[test]
    fn added_relationships_are_owned_by_the_person() {
        let mut person = sample();
        person.id = Some("p1".to_string());

        let edge = person.add_relationship("p2", RelationshipType::Parent).unwrap();
        assert!(edge.is_owned_by("p1"));
        assert!(person.add_relationship("p1", RelationshipType::Sibling).is_err());
        assert_eq!(person.relationships.len(), 1);
        assert!(person.relationship_ids().is_empty());
    }
}
