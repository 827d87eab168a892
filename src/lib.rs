//! Amulet Descent: a turn-based dungeon crawl over a fixed eight-floor map.
//!
//! Find the amulet on the middle floor and carry it up to the last floor
//! without bumping into the wardens.

pub mod command;
pub mod config;
pub mod data;
pub mod ecs;
pub mod error;
pub mod fsm;
pub mod map;
pub mod render;
pub mod scripted_input;

pub use command::Command;
pub use config::Config;
pub use error::{DescentError, Result};
pub use fsm::{FlowState, Session};
