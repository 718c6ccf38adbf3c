//! Value Objects Module
//!
//! 식별자가 없는 불변 도메인 값들을 정의합니다.
//! 생성자에서 모든 규칙을 검증하므로, 값이 존재한다면 항상 유효합니다.
//!
//! # 구성 요소
//!
//! - [`cpf::Cpf`] - 검증 숫자까지 확인된 11자리 CPF

pub mod cpf;

pub use cpf::{Cpf, CPF_LENGTH};
