//! 애플리케이션이 사용하는 설정 스키마(순수 데이터).
//!
//! 주의: 파일/환경변수 접근은 `infrastructure`에서만 수행한다.

use serde::{Deserialize, Serialize};

/// 미설정 시에도 공개 GitHub을 상대로 바로 동작하도록 기본 주소를 내장한다.
pub const DEFAULT_AUTHENTICATION_BASE_ADDRESS: &str = "https://github.com";
pub const DEFAULT_API_BASE_ADDRESS: &str = "https://api.github.com";
pub const DEFAULT_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// GitHub 연동 설정
    #[serde(default)]
    pub github: GitHubConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct GitHubConfig {
    /// 기기 인증(Device Flow) 엔드포인트 base URL
    pub authentication_base_address: Option<String>,
    /// REST API base URL (인증 base와 독립적으로 재지정 가능)
    pub api_base_address: Option<String>,
    /// OAuth 앱 client id(직접값)
    pub client_id: Option<String>,
    /// client id를 읽을 환경변수 이름
    pub client_id_env: Option<String>,
    /// 페이지당 저장소 수
    pub page_size: Option<u32>,
}

impl Config {
    pub fn authentication_base_address(&self) -> String {
        normalize_base_address(
            self.github.authentication_base_address.as_deref(),
            DEFAULT_AUTHENTICATION_BASE_ADDRESS,
        )
    }

    pub fn api_base_address(&self) -> String {
        normalize_base_address(
            self.github.api_base_address.as_deref(),
            DEFAULT_API_BASE_ADDRESS,
        )
    }

    /// 페이지 크기는 항상 1 이상으로 보정한다.
    pub fn page_size(&self) -> u32 {
        self.github.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    /// 후순위(나중 파일) 값으로 덮어쓰는 병합 규칙.
    pub fn merge_from(&mut self, other: Config) {
        self.github.merge_from(other.github);
    }
}

impl GitHubConfig {
    pub fn merge_from(&mut self, other: GitHubConfig) {
        if other.authentication_base_address.is_some() {
            self.authentication_base_address = other.authentication_base_address;
        }
        if other.api_base_address.is_some() {
            self.api_base_address = other.api_base_address;
        }
        if other.client_id.is_some() {
            self.client_id = other.client_id;
        }
        if other.client_id_env.is_some() {
            self.client_id_env = other.client_id_env;
        }
        if other.page_size.is_some() {
            self.page_size = other.page_size;
        }
    }
}

fn normalize_base_address(configured: Option<&str>, fallback: &str) -> String {
    configured
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .trim_end_matches('/')
        .to_string()
}
