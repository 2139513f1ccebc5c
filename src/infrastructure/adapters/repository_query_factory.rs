//! RepositoryQuery 팩토리 포트 구현 어댑터.

use crate::application::config::Config;
use crate::application::ports::{RepositoryQuery, RepositoryQueryFactory};
use crate::infrastructure::github::RepositoriesQueryClient;

/// 설정과 페이지 크기로 저장소 조회 클라이언트를 조립하는 팩토리.
pub struct GitHubRepositoryQueryFactory;

impl RepositoryQueryFactory for GitHubRepositoryQueryFactory {
    fn build(&self, config: &Config, page_size: u32) -> Box<dyn RepositoryQuery> {
        let api_base_address = config.api_base_address();
        tracing::debug!("API base address: {api_base_address}");

        Box::new(RepositoriesQueryClient::new(api_base_address, page_size))
    }
}
