//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use std::time::{Duration, Instant};

use anyhow::Result;
use async_trait::async_trait;

use crate::application::config::Config;
use crate::domain::auth::{AccessToken, AuthenticationError};
use crate::domain::repository::{FetchError, Repository};

/// 설정 로딩/점검을 담당하는 저장소 포트.
pub trait ConfigRepository: Send + Sync {
    fn load(&self) -> Result<Config>;
    fn inspect_pretty_json(&self) -> Result<String>;
}

/// 사용자 출력 경계 포트.
/// 검증 안내문, 결과 표, 오류 메시지가 모두 이 경계를 지난다.
pub trait Reporter: Send + Sync {
    fn present(&self, line: &str);
}

/// 폴링 대기/시각 측정 포트.
/// 실제 경과 시간 없이 플로우를 시험할 수 있도록 주입 가능해야 한다.
#[async_trait]
pub trait PollClock: Send + Sync {
    fn now(&self) -> Instant;
    /// 지정한 시간만큼 대기한다. 취소 신호를 받으면 false.
    async fn sleep(&self, duration: Duration) -> bool;
}

/// 기기 인증 플로우로 액세스 토큰을 얻는 포트.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn obtain_access_token(
        &self,
        reporter: &dyn Reporter,
    ) -> Result<AccessToken, AuthenticationError>;
}

/// 인증된 사용자의 저장소 전체 목록을 얻는 포트.
#[async_trait]
pub trait RepositoryQuery: Send + Sync {
    async fn fetch_all(&self, token: &AccessToken) -> Result<Vec<Repository>, FetchError>;
}

/// 저장소 목록 markdown 표 렌더링 포트.
pub trait TableRenderer: Send + Sync {
    fn render(&self, repositories: &[Repository]) -> Vec<String>;
}

/// 설정에 맞는 Authenticator를 생성하는 팩토리 포트.
pub trait AuthenticatorFactory: Send + Sync {
    fn build(&self, config: &Config) -> Box<dyn Authenticator>;
}

/// 설정/페이지 크기에 맞는 RepositoryQuery를 생성하는 팩토리 포트.
pub trait RepositoryQueryFactory: Send + Sync {
    fn build(&self, config: &Config, page_size: u32) -> Box<dyn RepositoryQuery>;
}
