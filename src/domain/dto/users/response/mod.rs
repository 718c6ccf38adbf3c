//! # 사용자 관련 응답 DTO 모듈
//!
//! 사용자 도메인과 관련된 HTTP 응답 데이터 전송 객체(DTO)들을 정의합니다.
//! Spring Boot의 `@ResponseBody`와 유사한 역할을 하며, 엔티티를
//! 클라이언트에게 전달할 형태로 투영합니다.
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
//!   "name": "Maria",
//!   "age": 25,
//!   "cpf": "987.654.321-00"
//! }
//! ```

pub mod user_response;

pub use user_response::UserResponse;
