//! # 문자열 유틸리티
//!
//! 도메인 검증에서 공통으로 사용하는 문자열 처리 함수들입니다.

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
///
/// # 인자
/// * `value` - 확인할 문자열
///
/// # 반환값
/// * `true` - 유효한 문자열
/// * `false` - 빈 문자열이거나 공백만 있는 경우
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::is_valid_string;
///
/// assert_eq!(is_valid_string("Maria"), true);
/// assert_eq!(is_valid_string("   "), false);
/// assert_eq!(is_valid_string(""), false);
/// ```
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 10진수 숫자(0-9)만 남기고 나머지 문자를 모두 제거합니다.
///
/// 구분 기호(`.`, `-`), 공백, 문자 등은 모두 버려집니다.
/// ASCII 숫자만 인정하며, 다른 문자 체계의 숫자(예: `٣`)는 제거 대상입니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::digits_only;
///
/// assert_eq!(digits_only("123.456.789-09"), "12345678909");
/// assert_eq!(digits_only("abc"), "");
/// ```
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}
