//! 회원 저장 레코드
//!
//! `persons` 컬렉션에 저장되는 평평한 문서 형태입니다.
//! 주소와 멤버십 정보는 자체 식별자를 가진 하위 문서로 임베드되고,
//! 관계는 이 문서에 들어가지 않습니다 (`relationships` 컬렉션 참조).

use chrono::NaiveDate;
use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

/// 회원 레코드
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonDto {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub first_name: String,
    pub last_name: String,
    /// `YYYY-MM-DD` 문자열로 저장
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub membership_information: MembershipInformationDto,
    pub address: AddressDto,
    pub added_on: DateTime,
    /// 저장소가 저장 시점에 기록
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime>,
}

/// 임베드된 멤버십 정보
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipInformationDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `MembershipType` 정수 코드
    #[serde(default)]
    pub membership_type: i32,
    pub date_of_membership: NaiveDate,
    #[serde(default)]
    pub membership_story: String,
    #[serde(default)]
    pub is_active: bool,
}

/// 임베드된 주소
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub street_line1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_line2: Option<String>,
    pub city: String,
    /// `States` 정수 코드
    #[serde(default)]
    pub state: i32,
    pub postal_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn record() -> PersonDto {
        PersonDto {
            id: Some("65f0c0ffee0000000000a001".to_string()),
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1976, 12, 9).unwrap(),
            email: "grace@example.com".to_string(),
            membership_information: MembershipInformationDto {
                id: Some("m1".to_string()),
                membership_type: 1,
                date_of_membership: NaiveDate::from_ymd_opt(2001, 5, 1).unwrap(),
                membership_story: "joined at the spring picnic".to_string(),
                is_active: true,
            },
            address: AddressDto {
                id: None,
                street_line1: "10 Lake Ave".to_string(),
                street_line2: None,
                city: "Duluth".to_string(),
                state: 23,
                postal_code: "55802".to_string(),
            },
            added_on: DateTime::from_millis(1_700_000_000_123),
            updated: None,
        }
    }

    #[test]
    fn serializes_id_as_mongo_key() {
        let doc = bson::to_document(&record()).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), "65f0c0ffee0000000000a001");
        assert!(!doc.contains_key("id"));
        assert!(!doc.contains_key("updated"));
        let membership = doc.get_document("membership_information").unwrap();
        assert_eq!(membership.get_bool("is_active").unwrap(), true);
        assert_eq!(membership.get_i32("membership_type").unwrap(), 1);
    }

    #[test]
    fn unsaved_record_has_no_id_key() {
        let mut dto = record();
        dto.id = None;

        let doc = bson::to_document(&dto).unwrap();
        assert!(!doc.contains_key("_id"));
    }

    #[test]
    fn bson_document_reads_back() {
        let dto = record();
        let doc = bson::to_document(&dto).unwrap();
        let back: PersonDto = bson::from_document(doc).unwrap();
        assert_eq!(back, dto);
    }
}
