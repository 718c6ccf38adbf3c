//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행하며,
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - JSON 해석, 상태 코드        ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 생성 오케스트레이션                   ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Entities / Value Objects - 검증 규칙            ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 핸들러는 `AppResult<HttpResponse>`를 반환합니다. 도메인의 `ValidationError`는
//! `?`로 `AppError`로 변환되고, `AppError`의 `ResponseError` 구현이
//! 400/500 JSON 응답을 만듭니다.
//!
//! ```rust,ignore
//! #[post("")]
//! pub async fn create_user(
//!     service: web::Data<UserService>,
//!     payload: web::Json<CreateUserRequest>,
//! ) -> AppResult<HttpResponse> {
//!     let response = service.create_user(payload.into_inner())?;
//!     Ok(HttpResponse::Ok().json(response))
//! }
//! ```

pub mod users;
