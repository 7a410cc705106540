use wasm_bindgen::prelude::*;
use web_sys::{Window, js_sys};

pub const DEFAULT_MOUNT_ID: &str = "app";

/// Startup settings of the application.
#[derive(Debug, Clone, PartialEq)]
pub struct BootConfig {
    pub mount_id: String,
}

impl Default for BootConfig {
    fn default() -> Self {
        Self {
            mount_id: DEFAULT_MOUNT_ID.to_string(),
        }
    }
}

impl BootConfig {
    /// Applies an optional mount id override on top of the defaults.
    pub fn build(mount_id: Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(id) = mount_id {
            let id = id.trim().trim_start_matches('#');
            if !id.is_empty() {
                config.mount_id = id.to_string();
            }
        }

        config
    }

    /// Reads `APP_MOUNT_ID` from the page globals.
    pub fn from_window(window: &Window) -> Self {
        Self::build(read_global(window, "APP_MOUNT_ID"))
    }
}

fn read_global(window: &Window, name: &str) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.as_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BootConfig::build(None);
        assert_eq!(config.mount_id, "app");
        assert_eq!(config, BootConfig::default());
    }

    #[test]
    fn test_mount_id_override() {
        let config = BootConfig::build(Some("#root".to_string()));
        assert_eq!(config.mount_id, "root");
    }

    #[test]
    fn test_blank_mount_id_keeps_default() {
        let config = BootConfig::build(Some("  ".to_string()));
        assert_eq!(config.mount_id, DEFAULT_MOUNT_ID);
    }
}
