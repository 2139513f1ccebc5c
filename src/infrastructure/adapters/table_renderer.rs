//! markdown 표 렌더링 포트 구현 어댑터.

use crate::application::ports::TableRenderer;
use crate::domain::repository::Repository;
use crate::infrastructure::render;

/// markdown 표 렌더링 어댑터.
pub struct MarkdownTableRenderer;

impl TableRenderer for MarkdownTableRenderer {
    fn render(&self, repositories: &[Repository]) -> Vec<String> {
        render::repository_table(repositories)
    }
}
