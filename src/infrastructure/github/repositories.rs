//! GitHub 저장소 목록 API 연동 구현.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::application::ports::RepositoryQuery;
use crate::domain::auth::AccessToken;
use crate::domain::repository::{FetchError, Repository};
use crate::infrastructure::github::USER_AGENT_VALUE;

/// 소유 저장소를 페이지 단위로 끝까지 수집하는 클라이언트.
/// 서버 정렬(push 내림차순)을 그대로 이어 붙인다.
pub struct RepositoriesQueryClient {
    client: Client,
    api_base_address: String,
    page_size: u32,
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    name: String,
    pushed_at: DateTime<Utc>,
    description: Option<String>,
    html_url: String,
    ssh_url: String,
    clone_url: String,
}

impl RepositoryResponse {
    fn into_domain(self) -> Repository {
        Repository {
            name: self.name,
            pushed_at: self.pushed_at,
            description: self.description,
            html_url: self.html_url,
            ssh_url: self.ssh_url,
            clone_url: self.clone_url,
        }
    }
}

impl RepositoriesQueryClient {
    pub fn new(api_base_address: String, page_size: u32) -> Self {
        Self {
            client: Client::new(),
            api_base_address,
            page_size: page_size.max(1),
        }
    }

    async fn fetch_page(
        &self,
        token: &AccessToken,
        page: u32,
    ) -> Result<Vec<RepositoryResponse>, FetchError> {
        let url = Url::parse(&format!("{}/user/repos", self.api_base_address))
            .map_err(|e| FetchError::Request(format!("invalid API base address: {e}")))?;

        let per_page = self.page_size.to_string();
        let page_number = page.to_string();

        tracing::debug!("requesting repository page {page} from {url}");

        let response = self
            .client
            .get(url)
            .query(&[
                ("affiliation", "owner"),
                ("sort", "pushed"),
                ("direction", "desc"),
                ("per_page", per_page.as_str()),
                ("page", page_number.as_str()),
            ])
            .bearer_auth(token.secret())
            .header("User-Agent", USER_AGENT_VALUE)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let items: Vec<RepositoryResponse> = serde_json::from_str(&body)
            .map_err(|e| FetchError::Decode(format!("invalid repository JSON: {e}")))?;
        tracing::debug!("page {page} returned {} repositories", items.len());

        Ok(items)
    }
}

#[async_trait]
impl RepositoryQuery for RepositoriesQueryClient {
    async fn fetch_all(&self, token: &AccessToken) -> Result<Vec<Repository>, FetchError> {
        let mut repositories = Vec::new();
        let mut page: u32 = 1;

        loop {
            let items = self.fetch_page(token, page).await?;

            // 요청한 개수보다 적게(0 포함) 돌아오면 마지막 페이지다.
            // 끝을 지난 페이지 번호는 절대 요청하지 않는다.
            let has_more = items.len() as u32 == self.page_size;
            repositories.extend(items.into_iter().map(RepositoryResponse::into_domain));
            if !has_more {
                break;
            }
            page += 1;
        }

        Ok(repositories)
    }
}
