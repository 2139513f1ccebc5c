//! 기기 인증(Device Flow) 도메인 값 객체와 오류.

use std::fmt;

use thiserror::Error;

/// 인증 서버가 플로우 시작 시 발급하는 승인 정보.
/// 발급 이후 불변이며 `expires_in` 초 동안만 유효하다.
#[derive(Debug, Clone)]
pub struct DeviceAuthorization {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    /// 승인 만료까지 남은 시간(초)
    pub expires_in: u64,
    /// 폴링 간격(초)
    pub interval: u64,
}

/// 플로우 완료 시 발급되는 액세스 토큰.
/// 실행 간 저장하지 않고 값으로만 전달한다.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    // 토큰 값이 로그에 실리지 않도록 마스킹한다.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(****)")
    }
}

/// 기기 인증 플로우 실패 분류.
#[derive(Debug, Error)]
pub enum AuthenticationError {
    #[error("client id is not configured")]
    MissingClientId,
    #[error("device code request failed: {0}")]
    DeviceCodeRequest(String),
    #[error("access token poll failed: {0}")]
    TokenPoll(String),
    #[error("device flow expired before access was granted")]
    Expired,
    #[error("device flow was cancelled")]
    Cancelled,
}
