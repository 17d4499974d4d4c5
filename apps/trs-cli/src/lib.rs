#![cfg_attr(feature = "strict", deny(warnings))]

use serde::{Deserialize, Serialize};

pub mod command;
pub mod dto;
pub mod init;
mod mapper;

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CliConfig {
    pub database_url: String,
    /// Brings the register schema up to date before the first query
    pub run_migrations: bool,
    pub trace_level: Option<String>,
    pub trace_json: Option<bool>,
}
