//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 주요 구성 요소
//!
//! ### User Entity
//! - **원자적 생성**: 이름, 나이, CPF 중 하나라도 실패하면 `User`는 만들어지지 않음
//! - **불변성**: 생성 이후 수정 메서드 없음
//! - **CPF 소유**: 검증된 [`Cpf`](crate::domain::value_objects::Cpf)를 단독으로 보유
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::create("Maria", 25, "987.654.321-00")?;
//! println!("{} ({})", user.name(), user.cpf());
//! ```

pub mod user;

pub use user::User;
