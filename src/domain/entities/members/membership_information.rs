//! 멤버십 정보 엔티티

use crate::domain::value_objects::DateOfMembership;
use super::MembershipType;

/// 회원의 멤버십 상태
///
/// 가입일은 [`DateOfMembership`] 값 객체이므로 미래 날짜일 수 없습니다.
/// `is_active == false` 인 회원은 보관(archived) 상태로 취급되어 기본 조회에서 제외됩니다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipInformation {
    /// 임베드된 레코드 식별자 (저장 전에는 None)
    pub id: Option<String>,
    pub membership_type: MembershipType,
    pub date_of_membership: DateOfMembership,
    pub membership_story: String,
    pub is_active: bool,
}

impl MembershipInformation {
    pub fn new(
        membership_type: MembershipType,
        date_of_membership: DateOfMembership,
        membership_story: impl Into<String>,
        is_active: bool,
    ) -> Self {
        Self {
            id: None,
            membership_type,
            date_of_membership,
            membership_story: membership_story.into(),
            is_active,
        }
    }
}
