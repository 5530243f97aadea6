//! The simulated fkthemes.nvim terminal: command parsing, the
//! interpreter that drives it, and the state of the demo surface.

mod app;
mod command;
mod interpreter;
mod mode;
pub mod preview;
mod quick;
mod transcript;

pub use app::{Demo, PICKER_COLUMNS};
pub use command::Command;
pub use interpreter::{InterpreterState, Outcome};
pub use mode::Mode;
pub use quick::QUICK_COMMANDS;
pub use transcript::{LineKind, Transcript};
