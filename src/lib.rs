#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod bitboard;
mod board;
#[cfg(feature = "std")]
mod cli;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
mod logging;
mod placer;
pub mod prelude;
mod ship;
mod shot;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
#[cfg(feature = "std")]
pub use cli::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, log_level, LOG_ENV};
pub use placer::*;
pub use ship::*;
pub use shot::fire;
#[cfg(feature = "std")]
pub use ui::*;
