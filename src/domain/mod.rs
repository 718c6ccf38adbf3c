//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈로, 비즈니스 규칙을 담당합니다.
//! Domain-Driven Design (DDD) 원칙에 따라 설계되었습니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Value Objects - 불변 값 (Cpf)
//! ├── Entities      - 핵심 비즈니스 객체 (User)
//! └── DTOs          - 데이터 전송 객체 (Request/Response)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Web Layer (Handlers, Routes)
//! ```
//!
//! ## 모듈 구성
//!
//! ### [`value_objects`] - 값 객체
//!
//! 식별자가 없는 불변 객체입니다. 생성자가 규칙을 강제하므로
//! 값이 존재하면 항상 유효합니다.
//!
//! ### [`entities`] - 핵심 도메인 엔티티
//!
//! 고유 ID를 가진 비즈니스 객체입니다. 이 시스템에서는 저장하지 않으며
//! 요청마다 생성됩니다.
//!
//! ### [`dto`] - 데이터 전송 객체
//!
//! API 경계에서 데이터를 전송하기 위한 객체들입니다.
//!
//! ## 실제 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::{entities::users::User, dto::UserResponse};
//!
//! // 1. 도메인 엔티티 생성 (검증 포함)
//! let user = User::create("Maria", 25, "987.654.321-00")?;
//!
//! // 2. 응답 DTO로 변환
//! let response = UserResponse::from(user);
//! assert_eq!(response.cpf, "987.654.321-00");
//! ```

pub mod value_objects;
pub mod entities;
pub mod dto;

pub use value_objects::Cpf;
pub use entities::users::User;
pub use dto::users::{CreateUserRequest, UserResponse};
