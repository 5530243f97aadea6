mod handler;
mod keymap;

pub use handler::handle_event;
pub use keymap::{Key, Keymap};
