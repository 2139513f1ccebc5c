//! 설정 병합 결과를 진단용으로 요약하는 모듈.

use std::path::PathBuf;

use serde::Serialize;

use super::loader::LoadedConfig;
use super::resolve::resolve_client_id;

#[derive(Debug, Serialize)]
pub struct ConfigInspection {
    pub searched_paths: Vec<PathBuf>,
    pub loaded_paths: Vec<PathBuf>,
    pub effective: EffectiveConfig,
}

/// client id 값 자체는 싣지 않고 출처 라벨만 노출한다.
#[derive(Debug, Serialize)]
pub struct EffectiveConfig {
    pub authentication_base_address: String,
    pub api_base_address: String,
    pub page_size: u32,
    pub client_id_source: String,
}

impl ConfigInspection {
    pub(crate) fn from_loaded(loaded: LoadedConfig) -> Self {
        let resolution = resolve_client_id(&loaded.config.github);
        let client_id_source = resolution
            .source
            .unwrap_or_else(|| "missing".to_string());

        Self {
            searched_paths: loaded.searched_paths,
            loaded_paths: loaded.loaded_paths,
            effective: EffectiveConfig {
                authentication_base_address: loaded.config.authentication_base_address(),
                api_base_address: loaded.config.api_base_address(),
                page_size: loaded.config.page_size(),
                client_id_source,
            },
        }
    }
}
