//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod authenticator_factory;
mod config_repository;
mod poll_clock;
mod reporter;
mod repository_query_factory;
mod table_renderer;

pub use authenticator_factory::GitHubAuthenticatorFactory;
pub use config_repository::JsonConfigRepository;
pub use poll_clock::TokioPollClock;
pub use reporter::ConsoleReporter;
pub use repository_query_factory::GitHubRepositoryQueryFactory;
pub use table_renderer::MarkdownTableRenderer;
