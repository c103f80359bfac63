//! Person / Address / MembershipInformation 변환

use chrono::{DateTime, TimeZone, Utc};
use mongodb::bson;

use crate::domain::dto::{AddressDto, MembershipInformationDto, PersonDto};
use crate::domain::entities::{Address, MembershipInformation, MembershipType, Person, Relationship, States};
use crate::domain::value_objects::{DateOfBirth, DateOfMembership, EmailAddress, NamePart, ValidationError};

impl PersonDto {
    /// 저장 레코드와 별도로 조회한 관계 목록으로 `Person`을 복원합니다.
    ///
    /// 값 객체 검증 실패는 그대로 전달됩니다. 손상된 레코드를 보정하지 않습니다.
    /// `relationships`는 모두 이 레코드가 소유(`from`)한 관계여야 합니다.
    pub fn into_person(self, relationships: Vec<Relationship>) -> Result<Person, ValidationError> {
        let owner = self.id.as_deref().unwrap_or_default();
        if let Some(foreign) = relationships.iter().find(|r| !r.is_owned_by(owner)) {
            let msg = format!("relationship from {} cannot be attached to person {}", foreign.from, owner);
            return Err(ValidationError::new("Relationship", msg));
        }

        Ok(Person {
            first_name: Some(NamePart::new(self.first_name)?),
            last_name: Some(NamePart::new(self.last_name)?),
            email: Some(EmailAddress::new(self.email)?),
            date_of_birth: Some(DateOfBirth::new(self.date_of_birth)?),
            membership_information: Some(self.membership_information.try_into()?),
            address: Some(self.address.try_into()?),
            relationships,
            added_on: from_bson_datetime(self.added_on, "AddedOn")?,
            updated_on: self
                .updated
                .map(|updated| from_bson_datetime(updated, "Updated"))
                .transpose()?,
            id: self.id,
        })
    }
}

impl TryFrom<&Person> for PersonDto {
    type Error = ValidationError;

    /// 값 객체를 원시값으로 풀어냅니다. 관계는 포함되지 않습니다.
    ///
    /// 빈 Person(조회 실패 결과)은 누락된 첫 필드를 가리키는 에러로 거부됩니다.
    fn try_from(person: &Person) -> Result<Self, Self::Error> {
        Ok(PersonDto {
            id: person.id.clone(),
            first_name: required(&person.first_name, "FirstName")?.value().to_string(),
            last_name: required(&person.last_name, "LastName")?.value().to_string(),
            date_of_birth: required(&person.date_of_birth, "DateOfBirth")?.value(),
            email: required(&person.email, "Email")?.value().to_string(),
            membership_information: required(&person.membership_information, "MembershipInformation")?
                .into(),
            address: required(&person.address, "Address")?.into(),
            added_on: bson::DateTime::from_millis(person.added_on.timestamp_millis()),
            updated: person
                .updated_on
                .map(|updated| bson::DateTime::from_millis(updated.timestamp_millis())),
        })
    }
}

impl TryFrom<MembershipInformationDto> for MembershipInformation {
    type Error = ValidationError;

    fn try_from(dto: MembershipInformationDto) -> Result<Self, Self::Error> {
        Ok(MembershipInformation {
            id: dto.id,
            membership_type: MembershipType::from_code(dto.membership_type),
            date_of_membership: DateOfMembership::new(dto.date_of_membership)?,
            membership_story: dto.membership_story,
            is_active: dto.is_active,
        })
    }
}

impl From<&MembershipInformation> for MembershipInformationDto {
    fn from(info: &MembershipInformation) -> Self {
        MembershipInformationDto {
            id: info.id.clone(),
            membership_type: info.membership_type.code(),
            date_of_membership: info.date_of_membership.value(),
            membership_story: info.membership_story.clone(),
            is_active: info.is_active,
        }
    }
}

impl TryFrom<AddressDto> for Address {
    type Error = ValidationError;

    /// 저장된 값은 그대로 유지합니다. 비어 있는 `street_line1`만 거부합니다.
    fn try_from(dto: AddressDto) -> Result<Self, Self::Error> {
        if dto.street_line1.trim().is_empty() {
            return Err(ValidationError::new("StreetLine1", "StreetLine1 is required"));
        }

        Ok(Address {
            id: dto.id,
            street_line1: dto.street_line1,
            street_line2: dto.street_line2,
            city: dto.city,
            state: States::from_code(dto.state),
            postal_code: dto.postal_code,
        })
    }
}

impl From<&Address> for AddressDto {
    fn from(address: &Address) -> Self {
        AddressDto {
            id: address.id.clone(),
            street_line1: address.street_line1.clone(),
            street_line2: address.street_line2.clone(),
            city: address.city.clone(),
            state: address.state.code(),
            postal_code: address.postal_code.clone(),
        }
    }
}

fn required<'a, T>(value: &'a Option<T>, field: &str) -> Result<&'a T, ValidationError> {
    value
        .as_ref()
        .ok_or_else(|| ValidationError::new(field, format!("{field} is required")))
}

fn from_bson_datetime(value: bson::DateTime, field: &str) -> Result<DateTime<Utc>, ValidationError> {
    Utc.timestamp_millis_opt(value.timestamp_millis())
        .single()
        .ok_or_else(|| ValidationError::new(field, format!("{} is out of range", value.timestamp_millis())))
}
