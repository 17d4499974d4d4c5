use std::sync::Arc;

use sql_data_provider::{DataLayer, DbConn};
use tracing_subscriber::prelude::*;
use trs_core::TrsCore;
use trs_core::config::core_config::AppConfig;

use crate::CliConfig;

pub fn initialize_core(app_config: &AppConfig<CliConfig>, db_conn: DbConn) -> TrsCore {
    TrsCore::new(Arc::new(DataLayer::build(db_conn)), app_config.core.clone())
}

pub fn initialize_tracing(config: &CliConfig) -> anyhow::Result<()> {
    // Create a filter based on the log level
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().or_else(|_| {
        tracing_subscriber::EnvFilter::try_new(config.trace_level.as_deref().unwrap_or("info"))
    })?;

    // Results go to stdout, so traces are kept on stderr
    let tracing_layer = tracing_subscriber::registry().with(filter);

    if config.trace_json.unwrap_or_default() {
        tracing_layer
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        tracing_layer
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()?;
    };

    Ok(())
}
