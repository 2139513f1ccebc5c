//! GitHub 연동 계층.
//! 기기 인증과 저장소 목록 API 구현을 공통 규약(헤더/오류 처리)으로 묶는다.

pub mod device_flow;
pub mod repositories;

pub use device_flow::DeviceFlowAuthenticator;
pub use repositories::RepositoriesQueryClient;

/// 모든 요청에 싣는 식별용 User-Agent.
pub const USER_AGENT_VALUE: &str = "repolist";
