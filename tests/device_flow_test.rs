//! 기기 인증 플로우 상태 기계를 모의 인증 서버로 검증한다.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use serde_json::json;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use repolist::application::config::{Config, GitHubConfig};
use repolist::application::ports::{Authenticator, AuthenticatorFactory, Reporter};
use repolist::domain::auth::AuthenticationError;
use repolist::infrastructure::adapters::{GitHubAuthenticatorFactory, TokioPollClock};
use repolist::infrastructure::github::DeviceFlowAuthenticator;

struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn new() -> Self {
        Self {
            lines: Mutex::new(Vec::new()),
        }
    }

    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn present(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

fn config_for(authentication_base_address: &str) -> Config {
    Config {
        github: GitHubConfig {
            authentication_base_address: Some(authentication_base_address.to_string()),
            client_id: Some("test-client-id".to_string()),
            ..GitHubConfig::default()
        },
    }
}

fn build_authenticator(authentication_base_address: &str) -> Box<dyn Authenticator> {
    GitHubAuthenticatorFactory::new(Arc::new(TokioPollClock::default()))
        .build(&config_for(authentication_base_address))
}

async fn mount_device_code(server: &MockServer, expires_in: u64, interval: u64) {
    Mock::given(method("POST"))
        .and(path("/login/device/code"))
        .and(body_partial_json(json!({ "client_id": "test-client-id" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "device_code": "device-code-1",
            "user_code": "ABCD-1234",
            "verification_uri": "https://github.com/login/device",
            "expires_in": expires_in,
            "interval": interval,
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn obtains_token_when_granted_on_first_poll() {
    let server = MockServer::start().await;
    mount_device_code(&server, 300, 0).await;
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .and(body_partial_json(json!({
            "client_id": "test-client-id",
            "device_code": "device-code-1",
            "grant_type": "urn:ietf:params:oauth:grant-type:device_code",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "token-value",
            "token_type": "bearer",
            "scope": "",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let token = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect("token should be granted on the first poll");

    assert_eq!(token.secret(), "token-value");
    assert_eq!(
        reporter.lines(),
        vec![
            "Please visit https://github.com/login/device and enter the code \"ABCD-1234\" \
             to authenticate this application."
                .to_string()
        ]
    );
}

#[tokio::test]
async fn pending_responses_poll_until_the_flow_expires() {
    let server = MockServer::start().await;
    mount_device_code(&server, 1, 0).await;
    // 승인 대기: 토큰 필드 없는 응답이 만료 때까지 이어진다.
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("flow should expire without a token");

    assert!(matches!(err, AuthenticationError::Expired));
}

#[tokio::test]
async fn empty_access_token_counts_as_pending() {
    let server = MockServer::start().await;
    mount_device_code(&server, 1, 0).await;
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_token": "" })),
        )
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("an empty token must never be granted");

    assert!(matches!(err, AuthenticationError::Expired));
}

#[tokio::test]
async fn already_expired_grant_never_polls() {
    let server = MockServer::start().await;
    mount_device_code(&server, 0, 0).await;
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("an expired grant cannot be polled");

    assert!(matches!(err, AuthenticationError::Expired));
}

#[tokio::test]
async fn device_code_error_status_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/device/code"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("device code request must fail");

    assert!(matches!(err, AuthenticationError::DeviceCodeRequest(_)));
    assert!(reporter.lines().is_empty());
}

#[tokio::test]
async fn poll_error_status_is_escalated_immediately() {
    let server = MockServer::start().await;
    mount_device_code(&server, 300, 0).await;
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("poll errors must not be swallowed");

    assert!(matches!(err, AuthenticationError::TokenPoll(_)));
}

#[tokio::test]
async fn poll_body_that_fails_to_decode_is_escalated_immediately() {
    let server = MockServer::start().await;
    mount_device_code(&server, 300, 0).await;
    Mock::given(method("POST"))
        .and(path("/login/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let authenticator = build_authenticator(&server.uri());
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("decode failures must not continue polling");

    assert!(matches!(err, AuthenticationError::TokenPoll(_)));
}

#[tokio::test]
async fn missing_client_id_fails_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login/device/code"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let authenticator = DeviceFlowAuthenticator::new(
        server.uri(),
        None,
        Arc::new(TokioPollClock::default()),
    );
    let reporter = RecordingReporter::new();

    let err = authenticator
        .obtain_access_token(&reporter)
        .await
        .expect_err("a client id is required");

    assert!(matches!(err, AuthenticationError::MissingClientId));
}

#[tokio::test]
async fn cancellation_aborts_an_in_progress_wait() {
    let server = MockServer::start().await;
    // 폴링 간격을 길게 잡아 대기 중 취소를 유도한다.
    mount_device_code(&server, 300, 60).await;

    let cancellation = CancellationToken::new();
    let factory =
        GitHubAuthenticatorFactory::new(Arc::new(TokioPollClock::new(cancellation.clone())));
    let authenticator = factory.build(&config_for(&server.uri()));

    let handle = tokio::spawn(async move {
        let reporter = RecordingReporter::new();
        authenticator.obtain_access_token(&reporter).await
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    cancellation.cancel();

    let result = handle.await.expect("task must not panic");
    assert!(matches!(result, Err(AuthenticationError::Cancelled)));
}
