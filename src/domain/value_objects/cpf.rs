//! CPF 값 객체
//!
//! 브라질 납세자 번호(CPF)를 파싱, 검증, 정규화합니다.
//!
//! ## 검증 알고리즘
//!
//! 1. 숫자가 아닌 문자를 모두 제거합니다 (`123.456.789-09` → `12345678909`)
//! 2. 비어 있으면 `empty`, 11자리가 아니면 `wrong-length`
//! 3. 11자리가 모두 같은 숫자면 `invalid`
//! 4. 첫 번째 검증 숫자: 앞 9자리에 가중치 10..2를 곱해 더한 뒤 mod 11
//! 5. 두 번째 검증 숫자: 앞 10자리에 가중치 11..2를 곱해 더한 뒤 mod 11
//!
//! 나머지가 2 미만이면 검증 숫자는 0, 아니면 `11 - 나머지`입니다.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::{ValidationError, ValidationKind};
use crate::utils::string_utils::{digits_only, is_valid_string};

/// CPF 숫자 개수
pub const CPF_LENGTH: usize = 11;

/// 검증된 CPF
///
/// 생성에 성공했다면 항상 11자리 정규형(구분 기호 없음)을 보관하며,
/// 두 검증 숫자가 앞자리와 일치함이 보장됩니다.
///
/// JSON에서는 정규형 문자열로 직렬화되고, 역직렬화 시 검증을 다시 거칩니다.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// 임의의 입력 문자열에서 CPF를 생성합니다.
    ///
    /// 구두점과 공백이 섞인 입력도 허용합니다.
    ///
    /// # 에러
    ///
    /// * `ValidationKind::Empty` - 숫자가 하나도 없음
    /// * `ValidationKind::WrongLength` - 숫자가 11개가 아님
    /// * `ValidationKind::Invalid` - 반복 숫자이거나 검증 숫자 불일치
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// let cpf = Cpf::new("123.456.789-09")?;
    /// assert_eq!(cpf.as_str(), "12345678909");
    /// assert_eq!(cpf.formatted(), "123.456.789-09");
    /// ```
    pub fn new(raw: &str) -> Result<Self, ValidationError> {
        let digits = digits_only(raw);

        if !is_valid_string(&digits) {
            return Err(ValidationError::new(ValidationKind::Empty));
        }

        if digits.len() != CPF_LENGTH {
            return Err(ValidationError::new(ValidationKind::WrongLength));
        }

        let numbers: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();

        if numbers.iter().all(|&n| n == numbers[0]) {
            return Err(ValidationError::new(ValidationKind::Invalid));
        }

        if check_digit(&numbers[..9]) != numbers[9] {
            return Err(ValidationError::new(ValidationKind::Invalid));
        }

        if check_digit(&numbers[..10]) != numbers[10] {
            return Err(ValidationError::new(ValidationKind::Invalid));
        }

        Ok(Self(digits))
    }

    /// 값이 없을 수 있는 입력에서 CPF를 생성합니다. `None`은 빈 문자열로 취급합니다.
    pub fn from_optional(raw: Option<&str>) -> Result<Self, ValidationError> {
        Self::new(raw.unwrap_or_default())
    }

    /// 정규형 11자리 문자열
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `DDD.DDD.DDD-DD` 형식의 표시용 문자열
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// 가중합 mod 11 검증 숫자
///
/// 가중치는 `prefix.len() + 1`부터 2까지 내려갑니다.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .zip((2..=top).rev())
        .map(|(digit, weight)| digit * weight)
        .sum();

    let rest = sum % 11;
    if rest < 2 { 0 } else { 11 - rest }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind_of(raw: &str) -> ValidationKind {
        Cpf::new(raw).unwrap_err().kind()
    }

    #[test]
    fn test_valid_cpf_in_any_representation() {
        for raw in ["12345678909", "123.456.789-09", "123 456 789 09"] {
            let cpf = Cpf::new(raw).unwrap();
            assert_eq!(cpf.as_str(), "12345678909");
            assert_eq!(cpf.formatted(), "123.456.789-09");
        }
    }

    #[test]
    fn test_representations_share_canonical_value() {
        let plain = Cpf::new("12345678909").unwrap();
        let dotted = Cpf::new("123.456.789-09").unwrap();
        let spaced = Cpf::new("123 456 789 09").unwrap();

        assert_eq!(plain, dotted);
        assert_eq!(plain, spaced);
    }

    #[test]
    fn test_check_digits_with_zero_rule() {
        // 두 검증 숫자 모두 나머지 < 2 규칙으로 0
        let cpf = Cpf::new("98765432100").unwrap();
        assert_eq!(cpf.formatted(), "987.654.321-00");
    }

    #[test]
    fn test_check_digits_with_subtraction_rule() {
        // 두 검증 숫자 모두 11 - 나머지 규칙
        let cpf = Cpf::new("529.982.247-25").unwrap();
        assert_eq!(cpf.as_str(), "52998224725");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(kind_of(""), ValidationKind::Empty);
        assert_eq!(kind_of("   "), ValidationKind::Empty);
        assert_eq!(kind_of("abc.-/"), ValidationKind::Empty);
        assert_eq!(
            Cpf::from_optional(None).unwrap_err().kind(),
            ValidationKind::Empty
        );
    }

    #[test]
    fn test_wrong_length() {
        assert_eq!(kind_of("123456789"), ValidationKind::WrongLength);
        assert_eq!(kind_of("123456789012"), ValidationKind::WrongLength);
        assert_eq!(kind_of("1"), ValidationKind::WrongLength);
        assert_eq!(kind_of("123.456.789-0"), ValidationKind::WrongLength);
    }

    #[test]
    fn test_repeated_digits_are_invalid() {
        for d in '0'..='9' {
            let raw: String = std::iter::repeat(d).take(CPF_LENGTH).collect();
            assert_eq!(kind_of(&raw), ValidationKind::Invalid, "{raw}");
        }
    }

    #[test]
    fn test_wrong_check_digits() {
        assert_eq!(kind_of("12345678901"), ValidationKind::Invalid);
        assert_eq!(kind_of("12345678900"), ValidationKind::Invalid);
        // 첫 번째 검증 숫자만 틀림
        assert_eq!(kind_of("12345678919"), ValidationKind::Invalid);
    }

    #[test]
    fn test_display_is_formatted() {
        let cpf: Cpf = "12345678909".parse().unwrap();
        assert_eq!(cpf.to_string(), "123.456.789-09");
    }

    #[test]
    fn test_serde_uses_canonical_form() {
        let cpf = Cpf::new("123.456.789-09").unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), "\"12345678909\"");

        let parsed: Cpf = serde_json::from_str("\"987.654.321-00\"").unwrap();
        assert_eq!(parsed.as_str(), "98765432100");

        assert!(serde_json::from_str::<Cpf>("\"11111111111\"").is_err());
    }
}
