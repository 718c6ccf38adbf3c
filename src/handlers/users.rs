//! # User HTTP Handlers
//!
//! 사용자 생성 HTTP 엔드포인트를 처리하는 핸들러입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/users` | 새 사용자 생성 | 200 OK |
//!
//! ## Spring Boot와의 비교
//!
//! ```java
//! @PostMapping
//! public ResponseEntity<UserResponse> createUser(@RequestBody CreateUserRequest request) {
//!     return ResponseEntity.ok(userService.create(request));
//! }
//! ```
//!
//! 이 모듈에서는 서비스를 전역 컨테이너가 아닌 `web::Data<UserService>`로 받습니다.

use actix_web::{HttpResponse, post, web};

use crate::{
    core::errors::AppResult,
    domain::dto::users::request::CreateUserRequest,
    services::users::UserService,
};

/// 사용자 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "Maria",
///   "age": 25,
///   "cpf": "987.654.321-00"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// {
///   "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
///   "name": "Maria",
///   "age": 25,
///   "cpf": "987.654.321-00"
/// }
/// ```
///
/// ## 검증 실패 (400 Bad Request)
/// ```json
/// {
///   "code": 400,
///   "error": "invalid",
///   "message": "Invalid CPF",
///   "timestamp": "2024-01-01T12:00:00+00:00"
/// }
/// ```
///
/// # 개인정보 보호
///
/// CPF는 로그에 기록하지 않습니다. 생성된 사용자 ID만 남깁니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Maria","age":25,"cpf":"987.654.321-00"}'
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> AppResult<HttpResponse> {
    log::info!("사용자 생성 요청 처리중");

    let response = service.create_user(payload.into_inner())?;

    log::info!("사용자 생성 완료: id={}", response.id);

    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, test, web};
    use serde_json::{Value, json};

    use crate::domain::dto::users::response::UserResponse;
    use crate::routes::configure_all_routes;
    use crate::services::users::UserService;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(UserService::new()))
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_user_ok() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "Maria", "age": 25, "cpf": "98765432100"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);

        let body: UserResponse = test::read_body_json(resp).await;
        assert_eq!(body.name, "Maria");
        assert_eq!(body.age, 25);
        assert_eq!(body.cpf, "987.654.321-00");
        assert!(!body.id.is_nil());
    }

    #[actix_web::test]
    async fn test_create_user_accepts_pascal_case_body() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"Name": "João Silva", "Age": 30, "Cpf": "123.456.789-09"}))
            .to_request();
        let body: UserResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.cpf, "123.456.789-09");
    }

    #[actix_web::test]
    async fn test_validation_failure_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "João", "age": 30, "cpf": "12345678901"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], 400);
        assert_eq!(body["error"], "invalid");
        assert_eq!(body["message"], "Invalid CPF");
    }

    #[actix_web::test]
    async fn test_first_violation_reported() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .set_json(json!({"name": "", "age": -1, "cpf": "11111111111"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["error"], "name-required");
    }

    #[actix_web::test]
    async fn test_malformed_body_is_bad_request() {
        let app = app!();

        let req = test::TestRequest::post()
            .uri("/api/v1/users")
            .insert_header(("Content-Type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "bad-request");
        assert_eq!(body["message"], "Invalid request body");
    }
}
