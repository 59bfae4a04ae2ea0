//! Network throughput sampler: cumulative interface counters in, bounded
//! bytes-per-second rates out.
//!
//! Counters are monotone in normal operation but can reset to zero when an
//! interface restarts, or appear to run backwards on a provider glitch. The
//! sampler treats any negative delta or implausibly large rate as an invalid
//! reading and publishes zero for BOTH directions rather than garbage for one.

use std::time::{Duration, Instant};

/// Maximum plausible throughput: 1000 MiB/s. Readings above this are rejected
/// outright (zeroed), not clamped.
pub const RATE_CAP: f64 = 1000.0 * 1024.0 * 1024.0; // bytes/sec

/// Minimum elapsed time between rate publishes. Ticks arriving faster than
/// this leave the published pair untouched.
pub const MIN_PUBLISH_INTERVAL: Duration = Duration::from_millis(500);

/// One cumulative read of a single interface's byte counters.
#[derive(Debug, Clone, Copy)]
pub struct CounterSample {
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub taken_at: Instant,
}

impl CounterSample {
    pub fn new(bytes_in: u64, bytes_out: u64, taken_at: Instant) -> Self {
        Self { bytes_in, bytes_out, taken_at }
    }

    /// The provider's failure substitute: counters read as zero.
    pub fn zero(taken_at: Instant) -> Self {
        Self::new(0, 0, taken_at)
    }
}

/// Published rate pair, always `0.0..=RATE_CAP` in each direction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatePair {
    /// Bytes transmitted per second.
    pub upload: f64,
    /// Bytes received per second.
    pub download: f64,
}

/// Converts a stream of counter samples into a denoised rate pair.
///
/// Two states: uninitialized (no sample seen yet) and active. The first tick
/// only seeds `previous`; every later tick either republishes the existing
/// pair (sub-interval tick) or computes a fresh one.
pub struct RateSampler {
    previous: Option<CounterSample>,
    last_published_at: Option<Instant>,
    rates: RatePair,
}

impl RateSampler {
    pub fn new() -> Self {
        Self {
            previous: None,
            last_published_at: None,
            rates: RatePair::default(),
        }
    }

    /// Last-published rate pair. Both directions were computed on the same
    /// tick, so readers never see a half-updated pair.
    pub fn rates(&self) -> RatePair {
        self.rates
    }

    /// Feed one counter sample. Returns the (possibly unchanged) published
    /// rates. Never fails; invalid readings degrade to a zero pair.
    pub fn on_tick(&mut self, now: Instant, current: CounterSample) -> RatePair {
        let Some(prev) = self.previous else {
            // First sample: seed state, publish nothing but the initial zeros.
            self.previous = Some(current);
            self.last_published_at = Some(now);
            return self.rates;
        };

        let published_at = self.last_published_at.unwrap_or(now);
        let elapsed = now.saturating_duration_since(published_at).as_secs_f64();

        if elapsed <= MIN_PUBLISH_INTERVAL.as_secs_f64() {
            // Too soon to republish, but `previous` must still advance so it
            // always reflects the latest read, not the latest published read.
            self.previous = Some(current);
            return self.rates;
        }

        // Signed deltas: counter resets and wraparound show up as negatives.
        // i128 so full-range u64 counters can't overflow the subtraction.
        let upload_delta = current.bytes_out as i128 - prev.bytes_out as i128;
        let download_delta = current.bytes_in as i128 - prev.bytes_in as i128;

        let upload_raw = upload_delta as f64 / elapsed;
        let download_raw = download_delta as f64 / elapsed;

        if upload_delta < 0
            || download_delta < 0
            || upload_raw > RATE_CAP
            || download_raw > RATE_CAP
        {
            // Invalid or reset reading: one bad direction zeroes both.
            self.rates = RatePair::default();
        } else {
            self.rates = RatePair {
                upload: upload_raw.clamp(0.0, RATE_CAP),
                download: download_raw.clamp(0.0, RATE_CAP),
            };
        }

        self.last_published_at = Some(now);
        self.previous = Some(current);
        self.rates
    }
}

impl Default for RateSampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn sample(at: Instant, bytes_in: u64, bytes_out: u64) -> CounterSample {
        CounterSample::new(bytes_in, bytes_out, at)
    }

    #[test]
    fn first_tick_publishes_zeros() {
        let t0 = Instant::now();
        let mut s = RateSampler::new();
        let rates = s.on_tick(t0, sample(t0, 123_456, 789));
        assert_eq!(rates, RatePair::default());
    }

    #[test]
    fn steady_traffic_yields_expected_rates() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 1000, 500));
        // 10 MiB down, 1 MiB up over one second.
        let rates = s.on_tick(t1, sample(t1, 1000 + 10 * MIB, 500 + MIB));
        assert!((rates.download - 10.0 * MIB as f64).abs() < 1.0);
        assert!((rates.upload - MIB as f64).abs() < 1.0);
    }

    #[test]
    fn counter_rollback_zeroes_both_directions() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let t2 = t1 + Duration::from_secs(1);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 5 * MIB, 5 * MIB));
        s.on_tick(t1, sample(t1, 6 * MIB, 6 * MIB));
        // Download counter runs backwards; upload was fine but gets zeroed too.
        let rates = s.on_tick(t2, sample(t2, 2 * MIB, 7 * MIB));
        assert_eq!(rates, RatePair::default());
    }

    #[test]
    fn rate_over_cap_is_rejected_not_clamped() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 0, 0));
        // 2000 MiB in one second: implausible, so zero, not 1000.
        let rates = s.on_tick(t1, sample(t1, 2000 * MIB, 0));
        assert_eq!(rates, RatePair::default());
    }

    #[test]
    fn sub_interval_tick_leaves_published_pair_unchanged() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let t2 = t1 + Duration::from_millis(200);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 0, 0));
        let published = s.on_tick(t1, sample(t1, 4 * MIB, 2 * MIB));
        assert!(published.download > 0.0);
        // 200ms later: below the publish interval, pair must not move.
        let again = s.on_tick(t2, sample(t2, 40 * MIB, 20 * MIB));
        assert_eq!(again, published);
    }

    #[test]
    fn same_instant_retick_is_a_noop() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 0, 0));
        let first = s.on_tick(t1, sample(t1, MIB, MIB));
        let second = s.on_tick(t1, sample(t1, MIB, MIB));
        assert_eq!(first, second);
    }

    #[test]
    fn previous_advances_even_on_gated_ticks() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let t2 = t1 + Duration::from_millis(100);
        let t3 = t1 + Duration::from_secs(1);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 0, 0));
        s.on_tick(t1, sample(t1, 10 * MIB, 0));
        // Gated tick carrying a big jump; it must become the new baseline.
        s.on_tick(t2, sample(t2, 12 * MIB, 0));
        // One second after the last publish: delta is measured from the
        // gated read (12 MiB), not from the published one (10 MiB).
        let rates = s.on_tick(t3, sample(t3, 13 * MIB, 0));
        assert!((rates.download - MIB as f64).abs() < 1.0);
    }

    #[test]
    fn zero_sample_after_real_traffic_recovers() {
        let t0 = Instant::now();
        let t1 = t0 + Duration::from_secs(1);
        let t2 = t1 + Duration::from_secs(1);
        let t3 = t2 + Duration::from_secs(1);
        let mut s = RateSampler::new();
        s.on_tick(t0, sample(t0, 50 * MIB, 50 * MIB));
        // Provider failure collapses to a zero sample -> negative delta.
        let rates = s.on_tick(t1, CounterSample::zero(t1));
        assert_eq!(rates, RatePair::default());
        // Counters resume from a fresh baseline; next delta is clean again.
        s.on_tick(t2, sample(t2, 60 * MIB, 60 * MIB));
        let rates = s.on_tick(t3, sample(t3, 61 * MIB, 60 * MIB));
        assert!((rates.download - MIB as f64).abs() < 1.0);
        assert_eq!(rates.upload, 0.0);
    }

    #[test]
    fn rates_stay_bounded_over_arbitrary_sequences() {
        let t0 = Instant::now();
        let mut s = RateSampler::new();
        // Mix of resets, spikes, stalls and ordinary traffic.
        let script: &[(u64, u64, u64)] = &[
            (0, 0, 0),
            (1000, 3 * MIB, MIB),
            (1400, 5 * MIB, 2 * MIB),     // gated
            (2000, u64::MAX / 2, 0),      // absurd spike
            (3000, 0, 0),                 // reset
            (4000, 8 * MIB, 8 * MIB),
            (5000, 9 * MIB, 9 * MIB),
            (5000, 9 * MIB, 9 * MIB),     // duplicate instant
            (6000, 10 * MIB, 10 * MIB),
        ];
        for &(ms, bytes_in, bytes_out) in script {
            let at = t0 + Duration::from_millis(ms);
            let rates = s.on_tick(at, sample(at, bytes_in, bytes_out));
            assert!(rates.upload.is_finite() && rates.download.is_finite());
            assert!(rates.upload >= 0.0 && rates.upload <= RATE_CAP);
            assert!(rates.download >= 0.0 && rates.download <= RATE_CAP);
        }
    }
}
