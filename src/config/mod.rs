//! Configuration - Rhai init script and the settings it produces
//!
//! Everything is exposed under the `fkthemes::config` namespace:
//! ```rhai
//! fkthemes::config::set_theme("tokyonight");
//! fkthemes::config::set_transparent_background(true);
//! fkthemes::config::bind("<C-p>", ":FkThemePicker");
//! ```

mod api;
mod engine;
mod settings;

pub use engine::ConfigEngine;
pub use settings::Settings;
