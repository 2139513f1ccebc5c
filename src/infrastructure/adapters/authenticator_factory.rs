//! Authenticator 팩토리 포트 구현 어댑터.

use std::sync::Arc;

use crate::application::config::Config;
use crate::application::ports::{Authenticator, AuthenticatorFactory, PollClock};
use crate::infrastructure::config::resolve_client_id;
use crate::infrastructure::github::DeviceFlowAuthenticator;

/// 설정으로부터 기기 인증 클라이언트를 조립하는 팩토리.
pub struct GitHubAuthenticatorFactory {
    poll_clock: Arc<dyn PollClock>,
}

impl GitHubAuthenticatorFactory {
    pub fn new(poll_clock: Arc<dyn PollClock>) -> Self {
        Self { poll_clock }
    }
}

impl AuthenticatorFactory for GitHubAuthenticatorFactory {
    fn build(&self, config: &Config) -> Box<dyn Authenticator> {
        let authentication_base_address = config.authentication_base_address();
        tracing::debug!("authentication base address: {authentication_base_address}");

        let resolution = resolve_client_id(&config.github);
        if let Some(source) = &resolution.source {
            tracing::debug!("client id source: {source}");
        }

        Box::new(DeviceFlowAuthenticator::new(
            authentication_base_address,
            resolution.client_id,
            Arc::clone(&self.poll_clock),
        ))
    }
}
