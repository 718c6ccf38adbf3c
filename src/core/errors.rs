//! # 에러 처리 시스템
//!
//! 도메인 검증 에러와 HTTP 경계 에러를 정의합니다.
//!
//! ## 에러 계층
//!
//! ```text
//! ValidationError (도메인)          ← Cpf / User 생성 실패
//!        │  #[from]
//!        ▼
//! AppError (애플리케이션 경계)       ← actix_web::ResponseError 구현
//!        │
//!        ▼
//! HTTP 응답 (400 / 500 + JSON)
//! ```
//!
//! 도메인 계층은 HTTP를 알지 못합니다. `ValidationError`는 순수한 값이며,
//! 상태 코드 변환은 `AppError`에서만 일어납니다.
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "code": 400,
//!   "error": "invalid",
//!   "message": "Invalid CPF",
//!   "timestamp": "2024-01-01T12:00:00+00:00"
//! }
//! ```

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// 검증 실패 사유 코드
///
/// 메시지 문구는 표현 계층의 관심사이고, 호출자가 의존해야 하는 계약은
/// 이 열거형입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationKind {
    /// 이름이 비어 있거나 공백뿐임
    NameRequired,
    /// 나이가 음수임
    AgeNegative,
    /// CPF에서 숫자를 하나도 찾을 수 없음
    Empty,
    /// CPF 숫자 개수가 11이 아님
    WrongLength,
    /// 동일 숫자 반복 또는 검증 숫자 불일치
    Invalid,
}

impl ValidationKind {
    /// 외부에 노출되는 사유 코드
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationKind::NameRequired => "name-required",
            ValidationKind::AgeNegative => "age-negative",
            ValidationKind::Empty => "empty",
            ValidationKind::WrongLength => "wrong-length",
            ValidationKind::Invalid => "invalid",
        }
    }

    /// 기본 메시지
    pub fn default_message(&self) -> &'static str {
        match self {
            ValidationKind::NameRequired => "Name is required",
            ValidationKind::AgeNegative => "Age cannot be negative",
            ValidationKind::Empty => "CPF cannot be empty",
            ValidationKind::WrongLength => "CPF must contain 11 digits",
            ValidationKind::Invalid => "Invalid CPF",
        }
    }
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 도메인 검증 에러
///
/// 입력값에 대한 결정적 함수이므로 같은 입력으로 재시도해도 결과는 같습니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    kind: ValidationKind,
    message: String,
}

impl ValidationError {
    /// 사유 코드의 기본 메시지로 에러를 생성합니다.
    pub fn new(kind: ValidationKind) -> Self {
        Self {
            kind,
            message: kind.default_message().to_string(),
        }
    }

    /// 사용자 지정 메시지로 에러를 생성합니다.
    pub fn with_message(kind: ValidationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ValidationKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// 애플리케이션 경계 에러 타입
///
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 도메인 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    /// 요청 본문 해석 실패 (400 Bad Request)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 상세 내용은 로그에만 남기고 클라이언트에는 일반 메시지만 보냅니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 코드
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(e) => e.kind().as_str(),
            AppError::BadRequest(_) => "bad-request",
            AppError::InternalError(_) => "internal",
        }
    }

    /// 클라이언트에게 보여줄 메시지
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(e) => e.message().to_string(),
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InternalError(_) => "Internal Server Error".to_string(),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// - `ValidationError`, `BadRequest` → 400 Bad Request
    /// - `InternalError` → 500 Internal Server Error
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 중 내부 오류: {}", self);
        } else {
            log::warn!("요청 거부됨 [{}]: {}", self.error_code(), self.client_message());
        }

        HttpResponse::build(status).json(serde_json::json!({
            "code": status.as_u16(),
            "error": self.error_code(),
            "message": self.client_message(),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;
