//! 관계 유형

coded_enum! {
    /// `from`이 `to`에 대해 가지는 관계.
    ///
    /// 예: Bob → Jimmy `Parent` 는 "Bob은 Jimmy의 부모" 를 뜻합니다.
    pub enum RelationshipType {
        Other = 0 => "Other",
        Parent = 1 => "Parent",
        Child = 2 => "Child",
        GrandParent = 3 => "GrandParent",
        GrandChild = 4 => "GrandChild",
        Sibling = 5 => "Sibling",
        Spouse = 6 => "Spouse",
        Guardian = 7 => "Guardian",
        Ward = 8 => "Ward",
        AuntUncle = 9 => "AuntUncle",
        NieceNephew = 10 => "NieceNephew",
        Cousin = 11 => "Cousin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(RelationshipType::Parent.code(), 1);
        assert_eq!(RelationshipType::GrandParent.code(), 3);
        assert_eq!(RelationshipType::Sibling.code(), 5);
        assert_eq!(RelationshipType::from_code(11), RelationshipType::Cousin);
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<i32> = RelationshipType::ALL.iter().map(|t| t.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), RelationshipType::ALL.len());
    }
}
