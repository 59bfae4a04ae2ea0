//! The per-tick metrics snapshot handed to the presentation layer.

/// Read-only view of one tick's metrics. Built in full by the collector and
/// swapped into the app wholesale, so the UI never observes a tick halfway
/// through (upload/download always come from the same tick).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Aggregate CPU busy percentage, 0-100, derived from the 1-minute load.
    pub cpu_percent: f64,
    /// 1-minute load average (or its EMA approximation).
    pub load_avg: f64,

    pub memory_percent: f64,
    pub memory_used: u64,  // bytes
    pub memory_total: u64, // bytes

    /// Bytes transmitted per second on the monitored interface.
    pub upload_rate: f64,
    /// Bytes received per second on the monitored interface.
    pub download_rate: f64,

    pub disk_percent: f64,
    pub disk_used: u64,  // bytes
    pub disk_total: u64, // bytes
}

/// Format bytes to human-readable string (KiB, MiB, GiB)
pub fn format_bytes(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;
    const TIB: u64 = 1024 * GIB;

    if bytes >= TIB {
        format!("{:.1}T", bytes as f64 / TIB as f64)
    } else if bytes >= GIB {
        format!("{:.1}G", bytes as f64 / GIB as f64)
    } else if bytes >= MIB {
        format!("{:.0}M", bytes as f64 / MIB as f64)
    } else if bytes >= KIB {
        format!("{:.0}K", bytes as f64 / KIB as f64)
    } else {
        format!("{}B", bytes)
    }
}

/// Format bytes/sec as human-readable rate
pub fn format_rate(bytes_per_sec: f64) -> String {
    if bytes_per_sec >= 1_073_741_824.0 {
        format!("{:.1} G/s", bytes_per_sec / 1_073_741_824.0)
    } else if bytes_per_sec >= 1_048_576.0 {
        format!("{:.1} M/s", bytes_per_sec / 1_048_576.0)
    } else if bytes_per_sec >= 1024.0 {
        format!("{:.1} K/s", bytes_per_sec / 1024.0)
    } else {
        format!("{:.0} B/s", bytes_per_sec)
    }
}

/// Percentage helper guarding against a zero denominator.
pub fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (used as f64 / total as f64) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_formatting_picks_sane_units() {
        assert_eq!(format_bytes(512), "512B");
        assert_eq!(format_bytes(2048), "2K");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5M");
        assert_eq!(format_bytes(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn rate_formatting_picks_sane_units() {
        assert_eq!(format_rate(100.0), "100 B/s");
        assert_eq!(format_rate(10.0 * 1_048_576.0), "10.0 M/s");
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(percent(100, 0), 0.0);
        assert_eq!(percent(1, 4), 25.0);
    }
}
