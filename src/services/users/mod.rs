//! 사용자 서비스 모듈
//!
//! 사용자 생성과 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 이름, 나이, CPF 검증을 거친 사용자 생성
//! - 엔티티 → 응답 DTO 투영 (CPF 포맷팅)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! let user_service = UserService::new();
//! let request = CreateUserRequest::new("Maria", 25, "987.654.321-00");
//! let response = user_service.create_user(request)?;
//! ```

pub mod user_service;

pub use user_service::UserService;
