//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버, 실행 환경, Rate Limiting, CORS 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 프로필 (.env.dev / .env.prod 선택)
//! export PROFILE="dev"
//!
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,https://app.example.com"
//!
//! # 로깅
//! export RUST_LOG="info,actix_web=debug"
//! ```
//!
//! ## Spring과의 비교
//!
//! | Spring | Rust (이 프로젝트) |
//! |--------|-------------------|
//! | `@Configuration` | `pub struct Config` |
//! | `@Value("${property}")` | `env::var("PROPERTY")` |
//! | `@Profile("dev")` | `Environment::Development` |
//! | `application.yml` | `.env` 파일 |

pub mod data_config;

pub use data_config::*;
