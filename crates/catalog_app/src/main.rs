mod config;
mod render;
mod shell;

use std::env;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use anyhow::Context;
use catalog_engine::{CatalogSession, ReqwestDataSource};
use catalog_logging::catalog_info;

use config::AppConfig;

fn main() -> anyhow::Result<()> {
    let config_path = env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref(), env::var("CATALOG_BASE_URL").ok())
        .context("loading configuration")?;

    catalog_logging::initialize(
        config.log_destination.into(),
        config.level_filter()?,
        &config.log_file,
    );
    catalog_info!(
        "catalog shell starting base_url={} page_size={}",
        config.base_url,
        config.page_size
    );

    let source = Arc::new(
        ReqwestDataSource::new(config.source_settings()).context("building http client")?,
    );
    let (session, views) =
        CatalogSession::start(source, config.page_size).context("starting catalog session")?;

    thread::spawn(move || {
        for view in views {
            print!("{}", render::render(&view));
        }
    });

    shell::run(&session, io::stdin().lock()).context("reading commands")?;
    Ok(())
}
