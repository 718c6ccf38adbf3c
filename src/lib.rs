//! CPF 사용자 서비스 백엔드
//!
//! 브라질 납세자 번호(CPF)를 검증, 정규화하고 검증된 필드로
//! 사용자(User) 엔티티를 생성하는 Rust 기반 서비스입니다.
//!
//! # Features
//!
//! - **CPF 검증**: 구분 기호 제거, 길이 확인, 반복 숫자 거부, mod 11 검증 숫자 2개 확인
//! - **CPF 포맷팅**: 정규형 `12345678909` ↔ 표시형 `123.456.789-09`
//! - **사용자 생성**: 이름 → 나이 → CPF 순서의 fail-fast 검증
//! - **무상태**: 저장소 없음, 요청마다 값만 생성
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 에러 → HTTP 상태 코드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 생성 오케스트레이션 (순수)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     Domain      │ ← User 엔티티, Cpf 값 객체
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use cpf_user_service::services::users::UserService;
//!
//! let service = UserService::new();
//! let user = service.create("Maria", 25, "987.654.321-00")?;
//! assert_eq!(user.cpf, "987.654.321-00");
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
