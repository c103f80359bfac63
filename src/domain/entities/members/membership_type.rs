//! 멤버십 유형

coded_enum! {
    /// 회원의 멤버십 유형. 지정되지 않은 경우 `Other`입니다.
    pub enum MembershipType {
        Other = 0 => "Other",
        Full = 1 => "Full",
        Associate = 2 => "Associate",
        Family = 3 => "Family",
        Life = 4 => "Life",
        Honorary = 5 => "Honorary",
    }
}

impl Default for MembershipType {
    fn default() -> Self {
        MembershipType::Other
    }
}
