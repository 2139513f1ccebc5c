//! 애플리케이션 조립(composition root) 모듈.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::application::usecases::inspect_config::InspectConfigUseCase;
use crate::application::usecases::list_repositories::ListRepositoriesUseCase;
use crate::infrastructure::adapters::{
    ConsoleReporter, GitHubAuthenticatorFactory, GitHubRepositoryQueryFactory,
    JsonConfigRepository, MarkdownTableRenderer, TokioPollClock,
};

/// 실행 시점 의존성을 한 곳에서 조립하는 컨테이너.
pub struct AppComposition {
    config_repo: JsonConfigRepository,
    authenticator_factory: GitHubAuthenticatorFactory,
    repository_query_factory: GitHubRepositoryQueryFactory,
    renderer: MarkdownTableRenderer,
    reporter: ConsoleReporter,
    cancellation: CancellationToken,
}

impl Default for AppComposition {
    fn default() -> Self {
        Self::new(CancellationToken::new())
    }
}

impl AppComposition {
    /// 폴링 대기를 중단시킬 취소 토큰을 받아 실행 조합을 생성한다.
    pub fn new(cancellation: CancellationToken) -> Self {
        let poll_clock: Arc<TokioPollClock> =
            Arc::new(TokioPollClock::new(cancellation.clone()));

        Self {
            config_repo: JsonConfigRepository,
            authenticator_factory: GitHubAuthenticatorFactory::new(poll_clock),
            repository_query_factory: GitHubRepositoryQueryFactory,
            renderer: MarkdownTableRenderer,
            reporter: ConsoleReporter,
            cancellation,
        }
    }

    /// 진행 중인 대기를 밖에서 중단할 때 사용할 토큰.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// 저장소 목록 유스케이스를 생성한다.
    pub fn list_repositories_usecase(&self) -> ListRepositoriesUseCase<'_> {
        ListRepositoriesUseCase {
            config_repo: &self.config_repo,
            authenticator_factory: &self.authenticator_factory,
            repository_query_factory: &self.repository_query_factory,
            renderer: &self.renderer,
            reporter: &self.reporter,
        }
    }

    /// 설정 점검 유스케이스를 생성한다.
    pub fn inspect_config_usecase(&self) -> InspectConfigUseCase<'_> {
        InspectConfigUseCase {
            config_repo: &self.config_repo,
        }
    }
}
