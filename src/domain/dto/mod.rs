//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! Spring Framework의 `@RequestBody`, `@ResponseBody`와 동일한 역할을 수행하며,
//! 클라이언트와 서버 간의 데이터 계약(Contract)을 명확히 정의합니다.
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@RequestBody` | `request` 모듈 | HTTP 요청 본문 매핑 |
//! | `@ResponseBody` | `response` 모듈 | HTTP 응답 본문 매핑 |
//! | `@JsonProperty` | `serde` annotations | JSON 필드 매핑 |
//! | Mapper 클래스 | `From<&User> for UserResponse` | 엔티티 → DTO 변환 |
//!
//! ## 설계 원칙
//!
//! - **내부 표현 vs 외부 표현**: 엔티티의 비공개 필드는 DTO를 통해서만 노출
//! - **표시 형식 분리**: CPF는 엔티티에서 정규형, 응답에서는 포맷된 문자열
//! - **검증 위치**: DTO는 형태만, 규칙은 도메인 엔티티에서

pub mod users;

pub use users::*;
