//! # Core Module
//!
//! 애플리케이션 전역에서 공유하는 핵심 타입을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **ValidationError**: 도메인 검증 실패 (사유 코드 + 메시지)
//! - **AppError**: HTTP 경계 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현
//! - **자동 변환**: `thiserror` 기반 `#[from]` 변환
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 프로젝트 |
//! |--------|-------------|
//! | `@ExceptionHandler` / `@ControllerAdvice` | `AppError::error_response()` |
//! | 도메인 예외 (`DomainException`) | `ValidationError` 값 |
//! | `throw` | `Result<T, ValidationError>` + `?` |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppResult, ValidationError, ValidationKind};
//!
//! fn check_age(age: i32) -> Result<u32, ValidationError> {
//!     u32::try_from(age).map_err(|_| ValidationError::new(ValidationKind::AgeNegative))
//! }
//!
//! // 핸들러에서는 `?`로 AppError로 자동 변환됩니다
//! async fn handler() -> AppResult<HttpResponse> {
//!     let age = check_age(-1)?;
//!     // ...
//! }
//! ```

pub mod errors;

pub use errors::*;
