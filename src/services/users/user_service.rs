//! # 사용자 생성 서비스 구현
//!
//! 원시 입력값으로 `User`를 생성하고 응답 DTO로 투영하는 얇은 오케스트레이션 계층입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 UserService                  │
//! │                                              │
//! │  name, age, cpf ──▶ User::create ──▶ From    │
//! │                      │                │      │
//! │                      ▼                ▼      │
//! │               ValidationError    UserResponse│
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 특징
//!
//! - **순수 함수**: I/O, 로깅, 재시도 없음
//! - **무상태**: 공유 필드가 없으므로 워커 간에 잠금 없이 공유 가능
//! - **명시적 주입**: 전역 싱글톤 대신 `main`에서 생성해 `web::Data`로 전달

use crate::{
    core::errors::ValidationError,
    domain::{
        dto::users::{request::CreateUserRequest, response::UserResponse},
        entities::users::User,
    },
};

/// 사용자 생성 비즈니스 로직 서비스
///
/// 추가 검증을 하지 않으며, 도메인에서 발생한 에러를 그대로 전달합니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// use actix_web::web;
/// use crate::services::users::UserService;
///
/// let service = web::Data::new(UserService::new());
/// App::new().app_data(service.clone())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UserService;

impl UserService {
    pub fn new() -> Self {
        Self
    }

    /// 원시 필드로 사용자 생성
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 (CPF는 `DDD.DDD.DDD-DD` 형식)
    /// * `Err(ValidationError)` - 처음 위반된 규칙 (이름 → 나이 → CPF 순)
    pub fn create(&self, name: &str, age: i32, cpf: &str) -> Result<UserResponse, ValidationError> {
        let user = User::create(name, age, cpf)?;
        Ok(UserResponse::from(user))
    }

    /// 요청 DTO로 사용자 생성
    ///
    /// 누락된 이름이나 CPF는 빈 문자열로 취급됩니다.
    pub fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, ValidationError> {
        self.create(request.name_or_empty(), request.age, request.cpf_or_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::ValidationKind;

    #[test]
    fn test_create_user_successfully() {
        let service = UserService::new();
        let request = CreateUserRequest::new("João Silva", 30, "12345678909");

        let response = service.create_user(request).unwrap();

        assert!(!response.id.is_nil());
        assert_eq!(response.name, "João Silva");
        assert_eq!(response.age, 30);
        assert_eq!(response.cpf, "123.456.789-09");
    }

    #[test]
    fn test_create_projects_formatted_cpf() {
        let response = UserService::new().create("Maria", 25, "98765432100").unwrap();

        assert_eq!(response.cpf, "987.654.321-00");
        assert_eq!(response.age, 25);
    }

    #[test]
    fn test_repeated_calls_yield_distinct_ids() {
        let service = UserService::new();

        let first = service.create("Maria", 25, "98765432100").unwrap();
        let second = service.create("Maria", 25, "98765432100").unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let service = UserService::new();

        let cases = [
            (CreateUserRequest::new("", 30, "12345678909"), ValidationKind::NameRequired),
            (CreateUserRequest::new("João Silva", -1, "12345678909"), ValidationKind::AgeNegative),
            (CreateUserRequest::new("João Silva", 30, "11111111111"), ValidationKind::Invalid),
            (CreateUserRequest::new("João", 30, "12345678901"), ValidationKind::Invalid),
        ];

        for (request, expected) in cases {
            let err = service.create_user(request).unwrap_err();
            assert_eq!(err.kind(), expected);
        }
    }

    #[test]
    fn test_missing_fields_are_treated_as_empty() {
        let service = UserService::new();

        let no_name = CreateUserRequest { name: None, ..CreateUserRequest::new("x", 30, "12345678909") };
        assert_eq!(service.create_user(no_name).unwrap_err().kind(), ValidationKind::NameRequired);

        let no_cpf = CreateUserRequest { cpf: None, ..CreateUserRequest::new("Maria", 30, "") };
        assert_eq!(service.create_user(no_cpf).unwrap_err().kind(), ValidationKind::Empty);
    }

    #[test]
    fn test_concurrent_creation_is_independent() {
        let service = UserService::new();

        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(move || service.create("Maria", 25, "98765432100").unwrap().id))
            .collect();

        let mut ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 8);
    }
}
