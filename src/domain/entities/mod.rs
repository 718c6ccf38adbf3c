//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//!
//! ## 엔티티 설계 원칙
//!
//! ### 1. 생성자에서 검증
//! ```rust,ignore
//! impl User {
//!     pub fn create(name: &str, age: i32, cpf: &str) -> Result<Self, ValidationError> {
//!         // 이름 → 나이 → CPF 순으로 검증, 첫 실패에서 중단
//!     }
//! }
//! ```
//!
//! ### 2. 타입 안전성
//! ```rust,ignore
//! // 원시 문자열 대신 검증된 도메인 타입 사용
//! pub struct User {
//!     id: Uuid,
//!     name: String,
//!     age: u32,   // 음수 불가
//!     cpf: Cpf,   // 검증 숫자까지 확인됨
//! }
//! ```
//!
//! ### 3. 영속성 없음
//! 엔티티는 요청마다 생성되어 응답 DTO로 변환된 뒤 버려집니다.
//! 저장소 계층은 존재하지 않습니다.
//!
//! ## 모듈 구조
//!
//! ```text
//! entities/
//! ├── mod.rs          ← 이 파일
//! └── users/
//!     ├── mod.rs
//!     └── user.rs     ← User 엔티티
//! ```

pub mod users;
