//! gamehost - boots a game, runs it to completion, and releases it on
//! every exit path.
//!
//! The host side is [`host::run_app`] and the [`app::App`] contract it
//! hosts. [`game::Game`] is the application the shipped binary runs: a
//! skeleton walking the tile floor plan in [`world`], configured through
//! [`config`].

pub mod app;
pub mod config;
pub mod game;
pub mod host;
pub mod world;

pub use app::App;
pub use host::run_app;
