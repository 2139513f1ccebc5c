//! 설정 값(client id)을 실제 런타임 값으로 해석하는 유틸리티.
//!
//! - 환경변수 접근은 인프라 계층에서만 수행한다.

use std::env;

use crate::application::config::GitHubConfig;

/// 아무 설정도 없을 때 마지막으로 조회하는 환경변수 이름.
pub const DEFAULT_CLIENT_ID_ENV: &str = "GITHUB_CLIENT_ID";

/// client id 해석 결과와 출처 라벨.
#[derive(Debug, Clone)]
pub struct ClientIdResolution {
    pub client_id: Option<String>,
    pub source: Option<String>,
}

/// client id는 직접값 우선, 없으면 지정 환경변수, 마지막으로 기본 환경변수를 조회한다.
pub fn resolve_client_id(cfg: &GitHubConfig) -> ClientIdResolution {
    if let Some(value) = cfg
        .client_id
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return ClientIdResolution {
            client_id: Some(value.to_string()),
            source: Some("inline".to_string()),
        };
    }

    let mut env_hint: Option<String> = None;
    if let Some(env_name) = cfg
        .client_id_env
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        match env::var(env_name).ok().map(|v| v.trim().to_string()) {
            Some(v) if !v.is_empty() => {
                return ClientIdResolution {
                    client_id: Some(v),
                    source: Some(format!("env:{env_name}")),
                };
            }
            _ => {
                env_hint = Some(format!("env:{env_name} (missing)"));
            }
        }
    }

    match env::var(DEFAULT_CLIENT_ID_ENV).ok().map(|v| v.trim().to_string()) {
        Some(v) if !v.is_empty() => ClientIdResolution {
            client_id: Some(v),
            source: Some(format!("env:{DEFAULT_CLIENT_ID_ENV}")),
        },
        _ => ClientIdResolution {
            client_id: None,
            source: env_hint,
        },
    }
}
