//! # 사용자 관련 요청 DTO 모듈
//!
//! 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@RequestBody`와 유사한 역할을 하며, 클라이언트로부터 받은 JSON 데이터를
//! 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::{web, HttpResponse};
//! use crate::domain::dto::users::request::CreateUserRequest;
//!
//! #[actix_web::post("")]
//! async fn create_user(
//!     service: web::Data<UserService>,
//!     req: web::Json<CreateUserRequest>,
//! ) -> AppResult<HttpResponse> {
//!     let response = service.create_user(req.into_inner())?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 400 `Invalid request body`)
//! 2. **도메인 검증**: 이름, 나이, CPF 규칙 (`User::create`)

pub mod create_user;

pub use create_user::CreateUserRequest;
