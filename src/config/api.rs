//! fkthemes::config - startup theme, display flags and keybinds
//!
//! Usage in Rhai:
//! ```rhai
//! fkthemes::config::set_theme("nord");
//! fkthemes::config::set_show_welcome(false);
//! fkthemes::config::bind("<C-n>", ":FkThemeNext");
//! ```

use rhai::plugin::*;
use std::sync::{Arc, RwLock};

use super::Settings;

/// Create the config module with access to settings
pub fn create_module(settings: Arc<RwLock<Settings>>) -> rhai::Module {
    let mut module = rhai::Module::new();

    // set_theme(key: &str)
    {
        let s = Arc::clone(&settings);
        module.set_native_fn("set_theme", move |key: &str| {
            if let Ok(mut settings) = s.write() {
                settings.theme = key.to_string();
            }
            Ok(())
        });
    }

    // get_theme() -> String
    {
        let s = Arc::clone(&settings);
        module.set_native_fn(
            "get_theme",
            move || -> Result<String, Box<EvalAltResult>> {
                Ok(s.read().map(|s| s.theme.clone()).unwrap_or_default())
            },
        );
    }

    // set_transparent_background(enabled: bool)
    {
        let s = Arc::clone(&settings);
        module.set_native_fn("set_transparent_background", move |enabled: bool| {
            if let Ok(mut settings) = s.write() {
                settings.transparent_background = enabled;
            }
            Ok(())
        });
    }

    // set_show_welcome(enabled: bool)
    {
        let s = Arc::clone(&settings);
        module.set_native_fn("set_show_welcome", move |enabled: bool| {
            if let Ok(mut settings) = s.write() {
                settings.show_welcome = enabled;
            }
            Ok(())
        });
    }

    // bind(key: &str, command: &str)
    {
        let s = Arc::clone(&settings);
        module.set_native_fn("bind", move |key: &str, command: &str| {
            if let Ok(mut settings) = s.write() {
                settings
                    .keybinds
                    .insert(key.to_string(), command.to_string());
            }
            Ok(())
        });
    }

    // list_themes() -> Array
    module.set_native_fn(
        "list_themes",
        || -> Result<rhai::Array, Box<EvalAltResult>> {
            Ok(crate::theme::keys()
                .map(|k| rhai::Dynamic::from(k.to_string()))
                .collect())
        },
    );

    module
}
