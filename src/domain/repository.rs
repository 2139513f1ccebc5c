//! 저장소 도메인 엔티티와 정렬 규칙.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// 사용자가 소유한 저장소 하나를 나타내는 불변 값.
#[derive(Debug, Clone, PartialEq)]
pub struct Repository {
    pub name: String,
    pub pushed_at: DateTime<Utc>,
    pub description: Option<String>,
    pub html_url: String,
    pub ssh_url: String,
    pub clone_url: String,
}

/// 출력 순서는 마지막 push 시각 오름차순.
/// 서버 응답(내림차순)을 표 출력 전에 뒤집는다.
pub fn sort_by_last_push(repositories: &mut [Repository]) {
    repositories.sort_by(|a, b| a.pushed_at.cmp(&b.pushed_at));
}

/// 저장소 목록 조회 실패 분류.
/// 어떤 페이지에서 실패하든 누적 결과는 버린다.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("repository page request failed: {0}")]
    Request(String),
    #[error("repository page returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("repository page decode failed: {0}")]
    Decode(String),
}

/// 목록 명령 실행 옵션.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// 페이지당 저장소 수 재지정(미지정 시 설정값)
    pub page_size: Option<u32>,
}
