//! `repolist` 바이너리 진입점.

use repolist::interface::cli::{Cli, CliAction};
use repolist::interface::composition::AppComposition;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let action = Cli::parse_action();
    let composition = AppComposition::default();

    match action {
        CliAction::InspectConfig => match composition.inspect_config_usecase().execute() {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        },
        CliAction::List(options) => {
            // 목록 명령은 성공/실패 모두 종료 코드 0.
            // 실패는 출력 메시지로만 알린다.
            composition
                .list_repositories_usecase()
                .execute(&options)
                .await;
        }
    }
}
