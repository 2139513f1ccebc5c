//! GitHub 기기 인증(Device Flow) 구현.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use url::Url;

use crate::application::ports::{Authenticator, PollClock, Reporter};
use crate::domain::auth::{AccessToken, AuthenticationError, DeviceAuthorization};
use crate::infrastructure::github::USER_AGENT_VALUE;

const DEVICE_CODE_PATH: &str = "/login/device/code";
const ACCESS_TOKEN_PATH: &str = "/login/oauth/access_token";
const DEVICE_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:device_code";

/// 기기 인증 플로우 상태 기계.
/// 승인 요청 -> 폴링 -> 발급/만료를 한 번의 실행으로 수행한다.
pub struct DeviceFlowAuthenticator {
    client: Client,
    authentication_base_address: String,
    client_id: Option<String>,
    poll_clock: Arc<dyn PollClock>,
}

#[derive(Debug, Deserialize)]
struct DeviceCodeResponse {
    device_code: String,
    user_code: String,
    verification_uri: String,
    expires_in: u64,
    interval: u64,
}

impl DeviceCodeResponse {
    fn into_domain(self) -> DeviceAuthorization {
        DeviceAuthorization {
            device_code: self.device_code,
            user_code: self.user_code,
            verification_uri: self.verification_uri,
            expires_in: self.expires_in,
            interval: self.interval,
        }
    }
}

/// 승인 대기 중에는 토큰 필드가 빠진 JSON 객체가 돌아온다.
/// 객체로 해석만 되면 "대기"로 취급하고, 해석 실패는 즉시 치명 오류다.
#[derive(Debug, Default, Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
}

impl DeviceFlowAuthenticator {
    pub fn new(
        authentication_base_address: String,
        client_id: Option<String>,
        poll_clock: Arc<dyn PollClock>,
    ) -> Self {
        Self {
            client: Client::new(),
            authentication_base_address,
            client_id,
            poll_clock,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, String> {
        Url::parse(&format!("{}{}", self.authentication_base_address, path))
            .map_err(|e| format!("invalid authentication base address: {e}"))
    }

    async fn request_device_code(
        &self,
        client_id: &str,
    ) -> Result<DeviceAuthorization, AuthenticationError> {
        let url = self
            .endpoint(DEVICE_CODE_PATH)
            .map_err(AuthenticationError::DeviceCodeRequest)?;
        tracing::debug!("requesting device code from {url}");

        let response = self
            .client
            .post(url)
            .header("User-Agent", USER_AGENT_VALUE)
            .header("Accept", "application/json")
            .json(&json!({ "client_id": client_id }))
            .send()
            .await
            .map_err(|e| AuthenticationError::DeviceCodeRequest(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthenticationError::DeviceCodeRequest(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthenticationError::DeviceCodeRequest(format!(
                "status {status}: {body}"
            )));
        }

        let decoded: DeviceCodeResponse = serde_json::from_str(&body)
            .map_err(|e| AuthenticationError::DeviceCodeRequest(format!("invalid device code JSON: {e}")))?;

        tracing::debug!(
            "device authorization received: verification_uri={} expires_in={}s interval={}s",
            decoded.verification_uri,
            decoded.expires_in,
            decoded.interval
        );

        Ok(decoded.into_domain())
    }

    /// 서버가 지정한 간격으로 토큰 발급을 확인한다.
    /// 만료 시각 전까지 토큰이 비어 있는 동안 반복한다.
    async fn wait_until_access_granted(
        &self,
        client_id: &str,
        authorization: &DeviceAuthorization,
    ) -> Result<String, AuthenticationError> {
        let started = self.poll_clock.now();
        let expires_in = Duration::from_secs(authorization.expires_in);
        let interval = Duration::from_secs(authorization.interval);

        let mut access_token: Option<String> = None;
        while access_token.is_none()
            && self.poll_clock.now().duration_since(started) < expires_in
        {
            if !self.poll_clock.sleep(interval).await {
                return Err(AuthenticationError::Cancelled);
            }

            let remaining =
                expires_in.saturating_sub(self.poll_clock.now().duration_since(started));
            tracing::debug!(
                "checking for authentication success for another {}s ...",
                remaining.as_secs()
            );

            access_token = self
                .poll_access_token(client_id, &authorization.device_code)
                .await?
                .filter(|token| !token.is_empty());
        }

        access_token.ok_or(AuthenticationError::Expired)
    }

    async fn poll_access_token(
        &self,
        client_id: &str,
        device_code: &str,
    ) -> Result<Option<String>, AuthenticationError> {
        let url = self
            .endpoint(ACCESS_TOKEN_PATH)
            .map_err(AuthenticationError::TokenPoll)?;

        let response = self
            .client
            .post(url)
            .header("User-Agent", USER_AGENT_VALUE)
            .header("Accept", "application/json")
            .json(&json!({
                "client_id": client_id,
                "device_code": device_code,
                "grant_type": DEVICE_GRANT_TYPE,
            }))
            .send()
            .await
            .map_err(|e| AuthenticationError::TokenPoll(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AuthenticationError::TokenPoll(e.to_string()))?;
        if !status.is_success() {
            return Err(AuthenticationError::TokenPoll(format!(
                "status {status}: {body}"
            )));
        }

        let decoded: AccessTokenResponse = serde_json::from_str(&body)
            .map_err(|e| AuthenticationError::TokenPoll(format!("invalid access token JSON: {e}")))?;

        Ok(decoded.access_token)
    }
}

#[async_trait]
impl Authenticator for DeviceFlowAuthenticator {
    async fn obtain_access_token(
        &self,
        reporter: &dyn Reporter,
    ) -> Result<AccessToken, AuthenticationError> {
        let client_id = self
            .client_id
            .as_deref()
            .ok_or(AuthenticationError::MissingClientId)?;

        let authorization = self.request_device_code(client_id).await?;

        reporter.present(&format!(
            "Please visit {} and enter the code \"{}\" to authenticate this application.",
            authorization.verification_uri, authorization.user_code
        ));

        let token = self
            .wait_until_access_granted(client_id, &authorization)
            .await?;

        Ok(AccessToken::new(token))
    }
}
