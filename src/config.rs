//! vitals configuration persistence (htoprc-style key=value format)
//!
//! Saves/loads settings to `$XDG_CONFIG_HOME/vitals/vitalsrc` (falling back
//! to `$HOME/.config/vitals/vitalsrc`).

use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Get the config file path: $XDG_CONFIG_HOME/vitals/vitalsrc
fn config_path() -> Option<PathBuf> {
    let base = std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".config"))
        })?;
    Some(base.join("vitals").join("vitalsrc"))
}

/// Persistable settings
pub struct VitalsConfig {
    pub update_interval_ms: u64,
    /// Interface whose counters feed the rate sampler; empty = auto-select
    /// the busiest interface at startup.
    pub interface: String,
    /// Mount point (or any path under it) for the disk gauge.
    pub disk_path: String,
    /// Demo mode: deterministic synthetic metrics instead of real ones.
    pub synthetic: bool,
    pub show_charts: bool,
}

impl Default for VitalsConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: 1000,
            interface: String::new(),
            disk_path: "/".to_string(),
            synthetic: false,
            show_charts: true,
        }
    }
}

impl VitalsConfig {
    /// Load config from file, returning defaults if file doesn't exist
    pub fn load() -> Self {
        let path = match config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };

        Self::parse(&content)
    }

    fn parse(content: &str) -> Self {
        let mut cfg = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim();
                match key {
                    "update_interval_ms" => {
                        if let Ok(v) = value.parse::<u64>() {
                            cfg.update_interval_ms = v.clamp(200, 10_000);
                        }
                    }
                    "interface" => cfg.interface = value.to_string(),
                    "disk_path" => {
                        if !value.is_empty() {
                            cfg.disk_path = value.to_string();
                        }
                    }
                    "synthetic" => cfg.synthetic = value == "1",
                    "show_charts" => cfg.show_charts = value == "1",
                    _ => {} // Ignore unknown keys
                }
            }
        }

        cfg
    }

    /// Save config to file
    pub fn save(&self) -> Result<(), String> {
        let path = match config_path() {
            Some(p) => p,
            None => return Err("Could not determine config path".into()),
        };

        // Create parent directory
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| format!("Failed to create config dir: {}", e))?;
        }

        let b = |v: bool| if v { "1" } else { "0" };

        let mut lines = Vec::new();
        lines.push("# vitals configuration file".to_string());
        lines.push("# Auto-generated — do not edit while vitals is running".to_string());
        lines.push(String::new());
        lines.push(format!("update_interval_ms={}", self.update_interval_ms));
        lines.push(format!("interface={}", self.interface));
        lines.push(format!("disk_path={}", self.disk_path));
        lines.push(format!("synthetic={}", b(self.synthetic)));
        lines.push(format!("show_charts={}", b(self.show_charts)));

        let content = lines.join("\n") + "\n";
        let mut file = fs::File::create(&path)
            .map_err(|e| format!("Failed to create config file: {}", e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        Ok(())
    }

    /// Build config from current App state
    pub fn from_app(app: &crate::app::App, interface: &str) -> Self {
        Self {
            update_interval_ms: app.update_interval_ms,
            interface: interface.to_string(),
            disk_path: app.disk_path.clone(),
            synthetic: app.synthetic,
            show_charts: app.show_charts,
        }
    }

    /// Apply loaded config to App state
    pub fn apply_to(&self, app: &mut crate::app::App) {
        app.update_interval_ms = self.update_interval_ms;
        app.disk_path = self.disk_path.clone();
        app.synthetic = self.synthetic;
        app.show_charts = self.show_charts;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_gives_defaults() {
        let cfg = VitalsConfig::parse("");
        assert_eq!(cfg.update_interval_ms, 1000);
        assert_eq!(cfg.disk_path, "/");
        assert!(!cfg.synthetic);
        assert!(cfg.show_charts);
    }

    #[test]
    fn comments_and_unknown_keys_are_ignored() {
        let cfg = VitalsConfig::parse(
            "# a comment\n\nunknown_key=5\ninterface= eth0 \nsynthetic=1\n",
        );
        assert_eq!(cfg.interface, "eth0");
        assert!(cfg.synthetic);
    }

    #[test]
    fn interval_is_clamped_on_load() {
        let cfg = VitalsConfig::parse("update_interval_ms=50\n");
        assert_eq!(cfg.update_interval_ms, 200);
        let cfg = VitalsConfig::parse("update_interval_ms=99999\n");
        assert_eq!(cfg.update_interval_ms, 10_000);
    }

    #[test]
    fn garbage_values_fall_back_to_defaults() {
        let cfg = VitalsConfig::parse("update_interval_ms=abc\nshow_charts=yes\n");
        assert_eq!(cfg.update_interval_ms, 1000);
        // Anything but "1" reads as false.
        assert!(!cfg.show_charts);
    }
}
