mod layout;
mod renderer;

pub use layout::{Layout, Rect};
pub use renderer::Renderer;
