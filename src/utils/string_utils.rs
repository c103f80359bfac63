//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::domain::value_objects::ValidationError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `field_name` - 에러에 실릴 필드명
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  1 Main St  ", "StreetLine1").unwrap(), "1 Main St");
/// assert!(validate_required_string("   ", "StreetLine1").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field_name, format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 선택적 문자열 필드 정리
///
/// None 값이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 Some 옵션으로 반환합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::clean_optional_string;
///
/// assert_eq!(clean_optional_string(Some("  Apt 2  ".to_string())), Some("Apt 2".to_string()));
/// assert_eq!(clean_optional_string(Some("   ".to_string())), None);
/// assert_eq!(clean_optional_string(None), None);
/// ```
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 대소문자 구분 없는 부분 문자열 검사
///
/// 빈 `needle`은 모든 문자열에 포함됩니다.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// 사용자 입력을 MongoDB `$regex` 부분 일치 패턴으로 변환
///
/// 정규식 메타문자는 이스케이프되므로 `O'Brien (Jr.)` 같은 입력도 글자 그대로 검색됩니다.
/// 대소문자 무시는 `$options: "i"`로 지정합니다.
pub fn name_search_pattern(name: &str) -> String {
    regex::escape(name.trim())
}
