//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 이 DTO는 형태만 담당하고, 필드 규칙 검증은 도메인 엔티티
//! [`User::create`](crate::domain::entities::users::User::create)가 수행합니다.
//!
//! ## 필드
//!
//! ### 이름 (`name`)
//! - 누락되거나 `null`이면 빈 문자열로 취급 → `name-required`
//!
//! ### 나이 (`age`)
//! - 32비트 정수, 누락 시 0
//! - 음수는 도메인에서 `age-negative`로 거부
//!
//! ### CPF (`cpf`)
//! - 구두점, 공백 허용 (`123.456.789-09`, `123 456 789 09`, `12345678909`)
//! - 누락되거나 `null`이면 빈 문자열로 취급 → `empty`
//!
//! ## JSON 예제
//!
//! ```json
//! {
//!   "name": "Maria",
//!   "age": 25,
//!   "cpf": "987.654.321-00"
//! }
//! ```
//!
//! 기존 클라이언트가 보내는 PascalCase 필드명(`Name`, `Age`, `Cpf`)도 허용합니다.

use serde::{Deserialize, Serialize};

/// 새로운 사용자 생성을 위한 요청 DTO
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// 사용자 이름
    #[serde(default, alias = "Name")]
    pub name: Option<String>,

    /// 나이
    #[serde(default, alias = "Age")]
    pub age: i32,

    /// 원본 CPF 문자열 (구분 기호 포함 가능)
    #[serde(default, alias = "Cpf")]
    pub cpf: Option<String>,
}

impl CreateUserRequest {
    pub fn new(name: impl Into<String>, age: i32, cpf: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            age,
            cpf: Some(cpf.into()),
        }
    }

    /// 이름 (누락 시 빈 문자열)
    pub fn name_or_empty(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// CPF 원본 (누락 시 빈 문자열)
    pub fn cpf_or_empty(&self) -> &str {
        self.cpf.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_snake_case() {
        let json = r#"{"name": "Maria", "age": 25, "cpf": "987.654.321-00"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request, CreateUserRequest::new("Maria", 25, "987.654.321-00"));
    }

    #[test]
    fn test_deserialize_pascal_case_aliases() {
        let json = r#"{"Name": "João Silva", "Age": 30, "Cpf": "12345678909"}"#;
        let request: CreateUserRequest = serde_json::from_str(json).unwrap();

        assert_eq!(request.name_or_empty(), "João Silva");
        assert_eq!(request.age, 30);
        assert_eq!(request.cpf_or_empty(), "12345678909");
    }

    #[test]
    fn test_missing_and_null_fields() {
        let request: CreateUserRequest = serde_json::from_str(r#"{"cpf": null}"#).unwrap();

        assert_eq!(request.name_or_empty(), "");
        assert_eq!(request.age, 0);
        assert_eq!(request.cpf_or_empty(), "");
    }

    #[test]
    fn test_age_must_be_integer() {
        let json = r#"{"name": "Maria", "age": "25", "cpf": "98765432100"}"#;
        assert!(serde_json::from_str::<CreateUserRequest>(json).is_err());
    }
}
