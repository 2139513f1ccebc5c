//! 폴링 시계 포트 구현 어댑터.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::application::ports::PollClock;

/// tokio 타이머 기반 폴링 시계.
/// 취소 토큰으로 진행 중인 대기를 밖에서 중단할 수 있다.
pub struct TokioPollClock {
    cancellation: CancellationToken,
}

impl TokioPollClock {
    pub fn new(cancellation: CancellationToken) -> Self {
        Self { cancellation }
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancellation.clone()
    }
}

impl Default for TokioPollClock {
    fn default() -> Self {
        Self::new(CancellationToken::new())
    }
}

#[async_trait]
impl PollClock for TokioPollClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) -> bool {
        tokio::select! {
            _ = tokio::time::sleep(duration) => true,
            _ = self.cancellation.cancelled() => false,
        }
    }
}
