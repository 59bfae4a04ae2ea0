//! One tick of metric collection: provider reads → rate sampler → snapshot.

use std::path::PathBuf;
use std::time::Instant;

use crate::app::App;
use crate::system::provider::MetricsProvider;
use crate::system::sampler::RateSampler;
use crate::system::snapshot::{percent, Snapshot};

/// Drives the provider and the rate sampler and publishes the results into
/// the [`App`]. Owned by the run loop; single writer, ticked at the
/// configured interval.
pub struct Collector {
    provider: Box<dyn MetricsProvider>,
    sampler: RateSampler,
    disk_path: PathBuf,
}

impl Collector {
    pub fn new(provider: Box<dyn MetricsProvider>, disk_path: PathBuf) -> Self {
        Self {
            provider,
            sampler: RateSampler::new(),
            disk_path,
        }
    }

    pub fn source_name(&self) -> &str {
        self.provider.source_name()
    }

    /// Refresh all metrics and publish a fresh snapshot into the App.
    pub fn refresh(&mut self, app: &mut App) {
        self.refresh_at(Instant::now(), app);
    }

    fn refresh_at(&mut self, now: Instant, app: &mut App) {
        if app.paused {
            return; // Z key: freeze display
        }

        let counters = self.provider.read_counters(now);
        let rates = self.sampler.on_tick(now, counters);

        let load = self.provider.read_load_average();
        let cores = self.provider.logical_cores().max(1);
        let mem = self.provider.read_memory_stats();
        let disk = self.provider.read_filesystem_stats(&self.disk_path);

        let snapshot = Snapshot {
            cpu_percent: (load / cores as f64 * 100.0).clamp(0.0, 100.0),
            load_avg: load,
            memory_percent: percent(mem.used_bytes, mem.total_bytes),
            memory_used: mem.used_bytes,
            memory_total: mem.total_bytes,
            upload_rate: rates.upload,
            download_rate: rates.download,
            disk_percent: percent(disk.used_bytes, disk.total_bytes),
            disk_used: disk.used_bytes,
            disk_total: disk.total_bytes,
        };

        app.history.record(&snapshot);
        app.snapshot = snapshot;
        app.uptime_seconds = self.provider.uptime_seconds();
        app.tick += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::system::history::HISTORY_LEN;
    use crate::system::provider::StubProvider;
    use crate::system::sampler::RATE_CAP;

    fn collector() -> Collector {
        Collector::new(Box::new(StubProvider::new(99)), PathBuf::from("/"))
    }

    #[test]
    fn first_tick_publishes_zero_rates_but_real_gauges() {
        let mut c = collector();
        let mut app = App::new();
        c.refresh_at(Instant::now(), &mut app);
        assert_eq!(app.snapshot.upload_rate, 0.0);
        assert_eq!(app.snapshot.download_rate, 0.0);
        assert!(app.snapshot.memory_total > 0);
        assert!(app.snapshot.disk_percent > 0.0);
        assert_eq!(app.tick, 1);
    }

    #[test]
    fn one_second_ticks_produce_bounded_positive_rates() {
        let t0 = Instant::now();
        let mut c = collector();
        let mut app = App::new();
        for i in 0..5u64 {
            c.refresh_at(t0 + Duration::from_secs(i), &mut app);
        }
        assert!(app.snapshot.download_rate > 0.0);
        assert!(app.snapshot.download_rate <= RATE_CAP);
        assert!(app.snapshot.upload_rate > 0.0);
        assert!(app.snapshot.upload_rate <= RATE_CAP);
    }

    #[test]
    fn paused_app_skips_the_tick_entirely() {
        let t0 = Instant::now();
        let mut c = collector();
        let mut app = App::new();
        c.refresh_at(t0, &mut app);
        let before = app.tick;
        app.paused = true;
        c.refresh_at(t0 + Duration::from_secs(1), &mut app);
        assert_eq!(app.tick, before);
        assert_eq!(app.history.cpu.len(), 1);
    }

    #[test]
    fn history_is_bounded_over_long_runs() {
        let t0 = Instant::now();
        let mut c = collector();
        let mut app = App::new();
        for i in 0..(HISTORY_LEN as u64 + 30) {
            c.refresh_at(t0 + Duration::from_secs(i), &mut app);
        }
        assert_eq!(app.history.download.len(), HISTORY_LEN);
        assert_eq!(app.history.cpu.len(), HISTORY_LEN);
    }

    #[test]
    fn snapshot_percentages_are_in_range() {
        let t0 = Instant::now();
        let mut c = collector();
        let mut app = App::new();
        for i in 0..10u64 {
            c.refresh_at(t0 + Duration::from_secs(i), &mut app);
            let s = &app.snapshot;
            assert!((0.0..=100.0).contains(&s.cpu_percent));
            assert!((0.0..=100.0).contains(&s.memory_percent));
            assert!((0.0..=100.0).contains(&s.disk_percent));
        }
    }
}
