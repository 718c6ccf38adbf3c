//! 서버 및 실행 환경 설정 관리 모듈
//!
//! 서버 바인딩, 실행 환경, Rate Limiting, CORS 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let name = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_name(&name)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `PORT`: 커스텀 포트 설정 (기본값: 8080)
    pub fn port() -> u16 {
        parse_or("PORT", 8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다.
    ///
    /// # Environment Variables
    ///
    /// - `HOST`: 커스텀 호스트 설정 (기본값: "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수
    ///
    /// # Environment Variables
    ///
    /// - `SERVER_WORKERS`: 워커 수 (기본값: 4, 0은 무시)
    pub fn workers() -> usize {
        match parse_or("SERVER_WORKERS", 4) {
            0 => 4,
            n => n,
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// # Examples
    ///
    /// ```bash
    /// # .env.dev (개발 환경)
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let config = Self {
            per_second: parse_or("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or("RATE_LIMIT_BURST_SIZE", 200),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 설정
pub struct CorsConfig;

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// 허용할 Origin 목록
    ///
    /// # Environment Variables
    ///
    /// - `CORS_ALLOWED_ORIGINS`: 쉼표로 구분된 Origin 목록
    pub fn allowed_origins() -> Vec<String> {
        match env::var("CORS_ALLOWED_ORIGINS") {
            Ok(raw) => Self::parse_origins(&raw),
            Err(_) => Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 환경변수를 파싱하고, 없거나 잘못된 값이면 기본값을 사용합니다.
fn parse_or<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        Err(_) => default,
    }
}
