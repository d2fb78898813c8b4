use std::path::PathBuf;

use anyhow::{Context, Result};
use voice_conv_config::create_from_json;

fn main() -> Result<()> {
    init_logger()?;

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("Expects config json path")?;
    let config = create_from_json(config_path.as_path())
        .with_context(|| format!("Loading {config_path:?}"))?;

    let archived = config.archive_to_output()?;
    log::info!("config archived to {archived:?}");

    let device = config.train.device()?;
    log::info!(
        "device={:?}, batchsize={}, seed={}, num_test={}",
        device,
        config.train.batchsize,
        config.dataset.seed,
        config.dataset.num_test
    );

    Ok(())
}

fn init_logger() -> Result<()> {
    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::ConfigBuilder::new()
            .set_time_format_rfc3339()
            .build(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
