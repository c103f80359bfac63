//! 관계 저장 레코드
//!
//! `relationships` 컬렉션의 문서입니다. 양 끝점은 Person 문서를 임베드하지 않고
//! 식별자 문자열만 저장하여 평평한 형태가 무한히 중첩되지 않도록 합니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipDto {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// 대상 person 식별자
    pub to: String,
    /// 소유자(주체) person 식별자
    pub from: String,
    /// `RelationshipType` 정수 코드
    #[serde(default)]
    pub relationship_type: i32,
}
