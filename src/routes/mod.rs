//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//!
//! # Routes
//!
//! - `GET /health` - 헬스체크
//! - `POST /api/v1/users` - 사용자 생성
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(UserService::new()))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::core::errors::AppError;
use crate::handlers;

/// 요청 본문을 해석하지 못했을 때 클라이언트에게 보내는 메시지
pub const INVALID_BODY_MESSAGE: &str = "Invalid request body";

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// - `POST /api/v1/users` - 사용자 생성
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Maria","age":25,"cpf":"987.654.321-00"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(json_config())
            .service(handlers::users::create_user)
    );
}

/// JSON 본문 추출 설정
///
/// 역직렬화 실패를 actix 기본 응답 대신 `AppError::BadRequest`로 통일합니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("요청 본문 해석 실패: {}", err);
        AppError::BadRequest(INVALID_BODY_MESSAGE.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "cpf_user_service",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure_all_routes)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "cpf_user_service");
    }
}
