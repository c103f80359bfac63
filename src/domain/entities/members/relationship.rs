//! 관계(edge) 엔티티

use crate::domain::value_objects::ValidationError;
use super::RelationshipType;

/// `from` → `to` 방향의 타입이 있는 관계
///
/// `from`이 주체이고 `relationship_type`은 `from`이 `to`에 대해 가지는 관계입니다.
/// 양 끝점은 Person 전체가 아닌 **식별자**로 보관하며, 실제 Person은 사용 시점에
/// 서비스 계층에서 조회합니다 (`MembershipService::get_related_persons`).
///
/// 관계는 소유자(`from`) 쪽에서만 보입니다. 반대 방향 관계는 자동으로 만들어지지 않습니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// 저장소가 부여한 식별자 (저장 전에는 None)
    pub id: Option<String>,
    /// 관계의 주체. 아직 저장되지 않은 Person이 소유한 경우 빈 문자열입니다.
    pub from: String,
    pub to: String,
    pub relationship_type: RelationshipType,
}

impl Relationship {
    /// 새 관계를 만듭니다.
    ///
    /// `to`가 비어있거나 `from`과 같으면 실패합니다.
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Result<Self, ValidationError> {
        let relationship = Self {
            id: None,
            from: from.into(),
            to: to.into(),
            relationship_type,
        };
        relationship.validate_endpoints()?;
        Ok(relationship)
    }

    pub(crate) fn validate_endpoints(&self) -> Result<(), ValidationError> {
        if self.to.is_empty() {
            return Err(ValidationError::new("Relationship", "related person id is required"));
        }
        if self.to == self.from {
            let msg = format!("person {} cannot be related to itself", self.to);
            return Err(ValidationError::new("Relationship", msg));
        }
        Ok(())
    }

    /// 이 관계가 주어진 person 소유인지 확인합니다.
    pub fn is_owned_by(&self, person_id: &str) -> bool {
        self.from == person_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_self_edges() {
        let err = Relationship::new("abc", "abc", RelationshipType::Sibling).unwrap_err();
        assert_eq!(err.field(), "Relationship");
    }

    #[test]
    fn rejects_missing_target() {
        assert!(Relationship::new("abc", "", RelationshipType::Parent).is_err());
    }

    #[test]
    fn allows_unsaved_owner() {
        let edge = Relationship::new("", "def", RelationshipType::Parent).unwrap();
        assert!(edge.is_owned_by(""));
        assert_eq!(edge.id, None);
    }
}
