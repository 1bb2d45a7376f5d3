#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod ai;
mod common;
mod config;
mod game;
mod grid;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod ship;
#[cfg(feature = "std")]
pub mod ui;

pub use ai::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
