//! CLI 명령 파싱 모듈.

use clap::{Parser, Subcommand};

use crate::domain::repository::ListOptions;

#[derive(Debug, Parser)]
#[command(name = "repolist")]
#[command(about = "List your GitHub repositories, least recently pushed first")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Repositories per API page (defaults to 100)
    #[arg(long)]
    page_size: Option<u32>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show effective merged config and where each value comes from
    Config,
}

pub enum CliAction {
    InspectConfig,
    List(ListOptions),
}

impl Cli {
    pub fn parse_action() -> CliAction {
        Self::action_from(Cli::parse())
    }

    fn action_from(cli: Cli) -> CliAction {
        match cli.command {
            Some(Commands::Config) => CliAction::InspectConfig,
            None => CliAction::List(ListOptions {
                page_size: cli.page_size,
            }),
        }
    }
}
