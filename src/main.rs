// src/main.rs
mod cli;
mod trace;
use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
// 入口函数
fn main() -> Result<()> {
    env_logger::init();
    // 参数错误由 clap 直接退出 (code 2)
    let cli = Cli::parse();
    let summary = trace::transcode(
        &cli.time_file,
        &cli.voltage_file,
        &cli.output_file,
        cli.style(),
    )
    .with_context(|| format!("failed to build trace {}", cli.describe()))?;
    log::info!(
        "wrote {} time / {} voltage samples to {}",
        summary.time_samples,
        summary.voltage_samples,
        cli.output_file.display()
    );
    Ok(())
}
