#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

mod actions;
mod cli;
mod config;
mod constants;
mod display;
mod errors;
mod gh;
mod pull_request;
mod select;
mod spinner;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = cli::Cli::parse().init_tracing_subscriber()?;

    match cli.run().await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            e.report();
            Ok(ExitCode::FAILURE)
        }
    }
}
