use crate::system::history::HistorySet;
use crate::system::snapshot::Snapshot;

/// Which view/mode the app is currently in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Help,
}

/// Main application state
pub struct App {
    pub mode: AppMode,
    pub should_quit: bool,
    pub paused: bool, // Z key: freeze/pause updates

    /// Last completed tick's metrics. Replaced wholesale each tick so the UI
    /// never sees upload and download from different ticks.
    pub snapshot: Snapshot,
    pub history: HistorySet,

    pub uptime_seconds: u64,
    pub tick: u64,

    // Display options
    pub show_charts: bool,
    pub update_interval_ms: u64,

    /// Name of the counter source shown in the header ("demo" in stub mode).
    pub source_name: String,
    pub disk_path: String,
    pub synthetic: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            mode: AppMode::Normal,
            should_quit: false,
            paused: false,
            snapshot: Snapshot::default(),
            history: HistorySet::new(),
            uptime_seconds: 0,
            tick: 0,
            show_charts: true,
            update_interval_ms: 1000,
            source_name: String::new(),
            disk_path: "/".to_string(),
            synthetic: false,
        }
    }

    /// Nudge the refresh interval, clamped to the same range the config
    /// loader accepts.
    pub fn adjust_interval(&mut self, delta_ms: i64) {
        let next = self.update_interval_ms as i64 + delta_ms;
        self.update_interval_ms = next.clamp(200, 10_000) as u64;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_adjustment_is_clamped() {
        let mut app = App::new();
        app.adjust_interval(-900);
        assert_eq!(app.update_interval_ms, 200);
        app.adjust_interval(100_000);
        assert_eq!(app.update_interval_ms, 10_000);
    }
}
