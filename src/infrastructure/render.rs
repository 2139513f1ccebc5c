//! 저장소 목록 markdown 표 렌더링 모듈.

use chrono::{DateTime, Utc};

use crate::domain::repository::Repository;

pub const TABLE_HEADER: &str =
    "| Repository name | Last Change | Description | HTML URL | SSH URL | Clone URL |";
pub const TABLE_SEPARATOR: &str = "| --- | --- | --- | --- | --- | --- |";

/// 고정 헤더 + 구분선 + 저장소당 한 행을 생성한다.
/// 입력 목록이 같으면 출력도 항상 같다.
pub fn repository_table(repositories: &[Repository]) -> Vec<String> {
    let mut lines = Vec::with_capacity(repositories.len() + 2);
    lines.push(TABLE_HEADER.to_string());
    lines.push(TABLE_SEPARATOR.to_string());

    for repository in repositories {
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            repository.name,
            format_push_time(&repository.pushed_at),
            repository.description.as_deref().unwrap_or(""),
            repository.html_url,
            repository.ssh_url,
            repository.clone_url
        ));
    }

    lines
}

/// 왕복 가능한 고정 UTC 형식(`yyyy-MM-ddTHH:mm:ssZ`)으로 맞춘다.
pub fn format_push_time(pushed_at: &DateTime<Utc>) -> String {
    pushed_at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn repository(name: &str, description: Option<&str>) -> Repository {
        Repository {
            name: name.to_string(),
            pushed_at: Utc.with_ymd_and_hms(2022, 1, 2, 3, 4, 5).unwrap(),
            description: description.map(str::to_string),
            html_url: format!("https://github.com/me/{name}"),
            ssh_url: format!("git@github.com:me/{name}.git"),
            clone_url: format!("https://github.com/me/{name}.git"),
        }
    }

    #[test]
    fn renders_fixed_header_and_separator() {
        let lines = repository_table(&[]);

        assert_eq!(
            lines,
            vec![TABLE_HEADER.to_string(), TABLE_SEPARATOR.to_string()]
        );
    }

    #[test]
    fn renders_one_pipe_separated_row_per_repository() {
        let lines = repository_table(&[repository("save-energy", Some("CLI experiment"))]);

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[2],
            "| save-energy | 2022-01-02T03:04:05Z | CLI experiment | \
             https://github.com/me/save-energy | git@github.com:me/save-energy.git | \
             https://github.com/me/save-energy.git |"
        );
    }

    #[test]
    fn missing_description_renders_as_empty_cell() {
        let lines = repository_table(&[repository("bare", None)]);

        assert!(lines[2].contains("| 2022-01-02T03:04:05Z |  |"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let repositories = vec![repository("a", Some("x")), repository("b", None)];

        assert_eq!(
            repository_table(&repositories),
            repository_table(&repositories)
        );
    }
}
