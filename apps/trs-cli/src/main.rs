use std::path::PathBuf;

use clap::Parser;
use trs_cli::CliConfig;
use trs_cli::command::{Command, run};
use trs_cli::init::{initialize_core, initialize_tracing};
use trs_core::config::core_config::AppConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    config: Option<Vec<PathBuf>>,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config_files = cli.config.unwrap_or_default();
    config_files.insert(0, "config/config.yml".into());

    let app_config: AppConfig<CliConfig> = AppConfig::from_files(&config_files)?;

    initialize_tracing(&app_config.app)?;

    let db_conn =
        sql_data_provider::db_conn(&app_config.app.database_url, app_config.app.run_migrations)
            .await?;
    let core = initialize_core(&app_config, db_conn);

    let output = run(&core, cli.command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}
