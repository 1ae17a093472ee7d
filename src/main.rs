//! Process entry point for desktop and console builds.
//!
//! With neither platform feature enabled this binary does not exist; some
//! other embedding is then expected to host the library.

#![cfg_attr(all(feature = "desktop", not(debug_assertions)), windows_subsystem = "windows")]

use anyhow::Context;
use log::info;

use gamehost::config::HostConfig;
use gamehost::game::Game;

#[cfg(feature = "desktop")]
const PLATFORM: &str = "desktop";
#[cfg(all(feature = "console", not(feature = "desktop")))]
const PLATFORM: &str = "console";

#[cfg(not(any(feature = "desktop", feature = "console")))]
compile_error!("the gamehost binary needs the 'desktop' or 'console' feature");

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    // log levels: error, warn, info, debug, trace
    info!(
        "starting up ({})... log level: {}",
        PLATFORM,
        log::max_level()
    );

    let config = HostConfig::load().context("loading host configuration")?;
    gamehost::run_app("gamehost", || Ok(Game::new(config.game)))
}
