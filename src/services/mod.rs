//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 무상태 값으로, `main`에서 생성되어 `web::Data`로 핸들러에 전달됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::services::users::UserService;
//!
//! let user_service = web::Data::new(UserService::new());
//! ```

pub mod users;
