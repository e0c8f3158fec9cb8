//! Background tasks module
//!
//! This module contains the tasks the game binary runs: the turn driver,
//! stdin command intake and countdown rendering.

pub mod display;
pub mod input;
pub mod turn_driver;

// Re-export main functions
pub use display::{display_task, format_countdown, format_report};
pub use input::{read_commands_task, stdin_commands_task};
pub use turn_driver::turn_driver_task;
