//! HTTP 미들웨어 설정 모듈
//!
//! Rate Limiting(`actix-governor`)과 CORS(`actix-cors`) 설정값을 환경 변수에서 읽어옵니다.

use std::env;

use super::data_config::parse_or_default;

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수
    pub per_second: u64,
    /// 버스트 허용량
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    ///
    /// ```bash
    /// # .env.dev
    /// RATE_LIMIT_PER_SECOND=20
    /// RATE_LIMIT_BURST_SIZE=40
    /// ```
    pub fn from_env() -> Self {
        let config = Self {
            per_second: parse_or_default("RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or_default("RATE_LIMIT_BURST_SIZE", 200),
        };

        log::info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// CORS 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// 허용할 Origin 목록
    pub allowed_origins: Vec<String>,
    /// Preflight 요청 캐시 시간 (초)
    pub max_age: usize,
}

impl CorsConfig {
    const DEFAULT_ORIGINS: [&'static str; 4] = [
        "http://localhost:3000",
        "http://127.0.0.1:3000",
        "http://localhost:8080",
        "http://127.0.0.1:8080",
    ];

    /// `CORS_ALLOWED_ORIGINS` (콤마 구분)에서 허용 Origin을 읽습니다.
    ///
    /// 설정되지 않았거나 비어 있으면 로컬 개발용 Origin을 사용합니다.
    pub fn from_env() -> Self {
        Self::from_origins(env::var("CORS_ALLOWED_ORIGINS").ok().as_deref())
    }

    /// 콤마로 구분된 Origin 문자열에서 설정을 생성합니다.
    pub fn from_origins(raw: Option<&str>) -> Self {
        let allowed_origins: Vec<String> = raw
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let allowed_origins = if allowed_origins.is_empty() {
            Self::DEFAULT_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            allowed_origins
        };

        Self {
            allowed_origins,
            max_age: 3600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let config = CorsConfig::from_origins(Some("https://app.example.com, https://admin.example.com ,"));

        assert_eq!(
            config.allowed_origins,
            vec![
                "https://app.example.com".to_string(),
                "https://admin.example.com".to_string()
            ]
        );
    }

    #[test]
    fn test_cors_defaults_to_localhost() {
        let config = CorsConfig::from_origins(None);
        assert_eq!(config.allowed_origins.len(), 4);
        assert!(config.allowed_origins.contains(&"http://localhost:3000".to_string()));

        let blank = CorsConfig::from_origins(Some("  "));
        assert_eq!(blank.allowed_origins, config.allowed_origins);
    }

    #[test]
    fn test_rate_limit_defaults() {
        if env::var("RATE_LIMIT_PER_SECOND").is_err() && env::var("RATE_LIMIT_BURST_SIZE").is_err() {
            let config = RateLimitConfig::from_env();
            assert_eq!(config.per_second, 100);
            assert_eq!(config.burst_size, 200);
        }
    }
}
