//! 저장소 목록 명령의 전체 오케스트레이션 유스케이스.

use anyhow::Result;

use crate::application::ports::{
    AuthenticatorFactory, ConfigRepository, Reporter, RepositoryQueryFactory, TableRenderer,
};
use crate::domain::repository::{ListOptions, sort_by_last_push};

/// 실패 시 사용자에게 보여주는 유일한 문장.
/// 원인(상태 코드, 예외 내용)은 로그로만 내보낸다.
pub const FATAL_ERROR_MESSAGE: &str =
    "An error prevents executing the command. Please check the logs for more information.";

/// 인증 -> 전체 페이지 조회 -> 오름차순 재정렬 -> 표 출력을 조율한다.
pub struct ListRepositoriesUseCase<'a> {
    pub config_repo: &'a dyn ConfigRepository,
    pub authenticator_factory: &'a dyn AuthenticatorFactory,
    pub repository_query_factory: &'a dyn RepositoryQueryFactory,
    pub renderer: &'a dyn TableRenderer,
    pub reporter: &'a dyn Reporter,
}

impl<'a> ListRepositoriesUseCase<'a> {
    /// 목록 명령 진입점. 어떤 실패든 고정 메시지 한 줄로 흡수한다.
    pub async fn execute(&self, options: &ListOptions) {
        if let Err(err) = self.run(options).await {
            tracing::error!("command failed: {err:#}");
            self.reporter.present(FATAL_ERROR_MESSAGE);
        }
    }

    async fn run(&self, options: &ListOptions) -> Result<()> {
        let config = self.config_repo.load()?;

        let authenticator = self.authenticator_factory.build(&config);
        let token = authenticator.obtain_access_token(self.reporter).await?;

        let page_size = options.page_size.map_or_else(|| config.page_size(), |v| v.max(1));
        let query = self.repository_query_factory.build(&config, page_size);
        let mut repositories = query.fetch_all(&token).await?;
        tracing::debug!("fetched {} repositories in total", repositories.len());

        sort_by_last_push(&mut repositories);
        for line in self.renderer.render(&repositories) {
            self.reporter.present(&line);
        }

        Ok(())
    }
}
