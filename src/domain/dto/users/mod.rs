//! # User DTOs Module
//!
//! 사용자 생성 API의 요청/응답 계약을 정의합니다.
//!
//! ## 데이터 흐름
//!
//! ```text
//! JSON 요청 ──▶ CreateUserRequest ──▶ User::create ──▶ UserResponse ──▶ JSON 응답
//!               (형태만 검사)          (도메인 검증)     (CPF 포맷팅)
//! ```
//!
//! ## 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   └── create_user.rs    - CreateUserRequest
//! └── response/
//!     └── user_response.rs  - UserResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
