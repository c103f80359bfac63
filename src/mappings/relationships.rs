//! Relationship 변환
//!
//! 끝점은 양방향 모두 식별자 문자열로 유지됩니다. Person 조회는 서비스 계층의 몫입니다.

use crate::domain::dto::RelationshipDto;
use crate::domain::entities::{Relationship, RelationshipType};
use crate::domain::value_objects::ValidationError;

impl TryFrom<RelationshipDto> for Relationship {
    type Error = ValidationError;

    fn try_from(dto: RelationshipDto) -> Result<Self, Self::Error> {
        if dto.id.is_none() {
            return Err(ValidationError::new("Relationship", "stored relationship has no id"));
        }
        if dto.from.is_empty() {
            return Err(ValidationError::new("Relationship", "owning person id is required"));
        }

        let relationship = Relationship {
            id: dto.id,
            from: dto.from,
            to: dto.to,
            relationship_type: RelationshipType::from_code(dto.relationship_type),
        };
        relationship.validate_endpoints()?;
        Ok(relationship)
    }
}

impl From<&Relationship> for RelationshipDto {
    fn from(relationship: &Relationship) -> Self {
        RelationshipDto {
            id: relationship.id.clone(),
            to: relationship.to.clone(),
            from: relationship.from.clone(),
            relationship_type: relationship.relationship_type.code(),
        }
    }
}

/// 저장된 관계 레코드 묶음을 도메인 관계로 변환합니다. 첫 실패에서 멈춥니다.
pub fn relationships_from_records(
    records: Vec<RelationshipDto>,
) -> Result<Vec<Relationship>, ValidationError> {
    records.into_iter().map(Relationship::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(id: Option<&str>, from: &str, to: &str, code: i32) -> RelationshipDto {
        RelationshipDto {
            id: id.map(str::to_string),
            to: to.to_string(),
            from: from.to_string(),
            relationship_type: code,
        }
    }

    #[test]
    fn keeps_endpoint_ids() {
        let dto = edge(Some("r1"), "bob", "jimmy", 1);
        let relationship = Relationship::try_from(dto.clone()).unwrap();

        assert_eq!(relationship.from, "bob");
        assert_eq!(relationship.to, "jimmy");
        assert_eq!(relationship.relationship_type, RelationshipType::Parent);
        assert_eq!(RelationshipDto::from(&relationship), dto);
    }

    #[test]
    fn rejects_self_edge_records() {
        let err = Relationship::try_from(edge(Some("r1"), "bob", "bob", 5)).unwrap_err();
        assert_eq!(err.field(), "Relationship");
    }

    #[test]
    fn rejects_records_without_id_or_owner() {
        assert!(Relationship::try_from(edge(None, "bob", "jimmy", 1)).is_err());
        assert!(Relationship::try_from(edge(Some("r1"), "", "jimmy", 1)).is_err());
        assert!(Relationship::try_from(edge(Some("r1"), "bob", "", 1)).is_err());
    }

    #[test]
    fn batch_conversion_stops_at_first_corrupt_record() {
        let records = vec![
            edge(Some("r1"), "bob", "jimmy", 1),
            edge(Some("r2"), "bob", "bob", 1),
        ];
        assert!(relationships_from_records(records).is_err());

        let ok = relationships_from_records(vec![edge(Some("r3"), "bob", "ann", 77)]).unwrap();
        assert_eq!(ok[0].relationship_type, RelationshipType::Unknown(77));
    }
}
