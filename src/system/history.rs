//! Bounded per-metric sample history for the sparkline panels.

use std::collections::VecDeque;

use crate::system::snapshot::Snapshot;

/// Samples kept per metric (one per tick, so roughly one minute).
pub const HISTORY_LEN: usize = 60;

/// Fixed-capacity FIFO of metric samples. Appending at capacity evicts the
/// oldest sample; both operations are O(1).
#[derive(Debug, Clone)]
pub struct MetricHistory {
    samples: VecDeque<f64>,
    capacity: usize,
}

impl MetricHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, value: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(value);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn latest(&self) -> Option<f64> {
        self.samples.back().copied()
    }

    pub fn max(&self) -> f64 {
        self.samples.iter().copied().fold(0.0, f64::max)
    }

    /// Samples as u64 for ratatui's `Sparkline`, scaled so the peak maps to
    /// `height` levels. All-zero history stays all-zero.
    pub fn sparkline_data(&self, height: u64) -> Vec<u64> {
        let max = self.max();
        if max <= 0.0 {
            return vec![0; self.samples.len()];
        }
        self.samples
            .iter()
            .map(|&v| ((v / max) * height as f64).round() as u64)
            .collect()
    }
}

/// One ring per displayed metric.
pub struct HistorySet {
    pub cpu: MetricHistory,
    pub memory: MetricHistory,
    pub download: MetricHistory,
    pub upload: MetricHistory,
    pub disk: MetricHistory,
}

impl HistorySet {
    pub fn new() -> Self {
        Self {
            cpu: MetricHistory::new(HISTORY_LEN),
            memory: MetricHistory::new(HISTORY_LEN),
            download: MetricHistory::new(HISTORY_LEN),
            upload: MetricHistory::new(HISTORY_LEN),
            disk: MetricHistory::new(HISTORY_LEN),
        }
    }

    /// Append one tick's snapshot across all rings.
    pub fn record(&mut self, snap: &Snapshot) {
        self.cpu.push(snap.cpu_percent);
        self.memory.push(snap.memory_percent);
        self.download.push(snap.download_rate);
        self.upload.push(snap.upload_rate);
        self.disk.push(snap.disk_percent);
    }
}

impl Default for HistorySet {
    fn default() -> Self {
        Self::new()
    }
}
