//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 숫자 추출 유틸리티
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::{digits_only, is_valid_string};
//!
//! assert!(is_valid_string("Maria"));
//! assert_eq!(digits_only("987.654.321-00"), "98765432100");
//! ```

pub mod string_utils;
