//! 터미널 출력 포맷팅 유틸리티
//!
//! 애플리케이션 초기화 과정과 회원 명부 요약에 사용되는 터미널 출력 함수들을 제공합니다.

use crate::domain::entities::Person;

/// 박스 형태로 둘러싸인 제목을 출력합니다
///
/// 텍스트는 자동으로 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                Membership Service                ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn print_boxed_title(title: &str) {
    // 고정 너비 50칸 사용 (박스 내부 콘텐츠)
    let content_width = 50;
    let border = "═".repeat(content_width);

    println!("╔{}╗", border);
    println!("║{:^50}║", title);
    println!("╚{}╝", border);
}

/// 진행 단계 시작을 표시합니다
///
/// ```text
/// → Step 1: Connecting to MongoDB
/// ```
pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

/// 진행 단계 완료를 표시합니다
///
/// ```text
/// ✓ Step 2: Indexes created (2 collections)
/// ```
pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({})", step, description, count);
}

/// 명부 한 줄
///
/// `이름 <이메일> [멤버십 타입, 가입일] 관계 N건` 형식입니다.
pub fn format_roster_line(person: &Person) -> String {
    let email = person.email.as_ref().map(|e| e.value()).unwrap_or("-");
    let membership = person
        .membership_information
        .as_ref()
        .map(|info| format!("{}, since {}", info.membership_type, info.date_of_membership))
        .unwrap_or_else(|| "no membership".to_string());

    format!(
        "{} <{}> [{}] relationships: {}",
        person.full_name(),
        email,
        membership,
        person.relationships.len()
    )
}

/// 활성 회원 명부 요약을 출력합니다
pub fn print_roster(title: &str, persons: &[Person]) {
    print_boxed_title(title);
    if persons.is_empty() {
        println!("  (no members)");
        return;
    }
    for person in persons {
        println!("  • {}", format_roster_line(person));
    }
    println!("  총 {}명", persons.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::domain::entities::{Address, MembershipInformation, MembershipType, States};
    use crate::domain::value_objects::{DateOfBirth, DateOfMembership, EmailAddress, NamePart};

    #[test]
    fn roster_line_shows_name_membership_and_edge_count() {
        let mut person = Person::new(
            NamePart::new("Ada").unwrap(),
            NamePart::new("Lovelace").unwrap(),
            EmailAddress::new("ada@example.com").unwrap(),
            DateOfBirth::new(NaiveDate::from_ymd_opt(1985, 12, 10).unwrap()).unwrap(),
            MembershipInformation::new(
                MembershipType::Life,
                DateOfMembership::new(NaiveDate::from_ymd_opt(2010, 3, 1).unwrap()).unwrap(),
                "",
                true,
            ),
            Address::new("1 Main St", None, "Duluth", States::Minnesota, "55802").unwrap(),
        );
        person.id = Some("p1".to_string());
        person.add_relationship("p2", crate::domain::entities::RelationshipType::Spouse).unwrap();

        let line = format_roster_line(&person);
        assert!(line.starts_with("Ada Lovelace <ada@example.com>"));
        assert!(line.contains("2010-03-01"));
        assert!(line.ends_with("relationships: 1"));
    }

    #[test]
    fn roster_line_for_empty_person() {
        let line = format_roster_line(&Person::default());
        assert!(line.contains("<->"));
        assert!(line.contains("no membership"));
    }
}
