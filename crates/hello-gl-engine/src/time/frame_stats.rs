use std::time::{Duration, Instant};

/// Frame rate over one report window.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameReport {
    /// Frames presented in this window.
    pub frames: u32,

    /// Length of the window.
    pub elapsed: Duration,

    /// `frames / elapsed`, in frames per second.
    pub fps: f32,

    /// Frames presented since the stats were created.
    pub total: u64,
}

/// Counts presented frames and summarizes them once per interval.
#[derive(Debug, Clone)]
pub struct FrameStats {
    window_start: Instant,
    frames_in_window: u32,
    total: u64,
    interval: Duration,
}

impl FrameStats {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

    pub fn new(start: Instant) -> Self {
        Self::with_interval(start, Self::DEFAULT_INTERVAL)
    }

    /// Shortest accepted report interval; shorter requests are raised to it.
    pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

    pub fn with_interval(start: Instant, interval: Duration) -> Self {
        Self {
            window_start: start,
            frames_in_window: 0,
            total: 0,
            interval: interval.max(Self::MIN_INTERVAL),
        }
    }

    /// Total frames recorded so far.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Records one presented frame at `now`.
    ///
    /// Returns a report when the current window has lasted at least one
    /// interval; the next window starts at `now`.
    pub fn record(&mut self, now: Instant) -> Option<FrameReport> {
        self.frames_in_window = self.frames_in_window.saturating_add(1);
        self.total = self.total.wrapping_add(1);

        let elapsed = now.saturating_duration_since(self.window_start);
        if elapsed < self.interval {
            return None;
        }

        let report = FrameReport {
            frames: self.frames_in_window,
            elapsed,
            fps: self.frames_in_window as f32 / elapsed.as_secs_f32(),
            total: self.total,
        };

        self.window_start = now;
        self.frames_in_window = 0;

        Some(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_report_before_interval() {
        let t0 = Instant::now();
        let mut stats = FrameStats::new(t0);
        for i in 1..10 {
            assert!(stats.record(t0 + Duration::from_millis(i * 10)).is_none());
        }
        assert_eq!(stats.total(), 9);
    }

    #[test]
    fn reports_fps_and_restarts_window() {
        let t0 = Instant::now();
        let mut stats = FrameStats::with_interval(t0, Duration::from_millis(500));

        for i in 1..60 {
            assert!(stats.record(t0 + Duration::from_millis(i * 8)).is_none());
        }
        let report = stats.record(t0 + Duration::from_millis(500)).unwrap();
        assert_eq!(report.frames, 60);
        assert_eq!(report.total, 60);
        assert!((report.fps - 120.0).abs() < 1e-3);

        let next = stats.record(t0 + Duration::from_millis(1000)).unwrap();
        assert_eq!(next.frames, 1);
        assert_eq!(next.total, 61);
    }

    #[test]
    fn zero_interval_never_reports_infinite_fps() {
        let t0 = Instant::now();
        let mut stats = FrameStats::with_interval(t0, Duration::ZERO);
        assert!(stats.record(t0).is_none());

        let report = stats.record(t0 + FrameStats::MIN_INTERVAL).unwrap();
        assert_eq!(report.frames, 2);
        assert!(report.fps.is_finite());
    }

    #[test]
    fn clock_going_backwards_does_not_report() {
        let t0 = Instant::now() + Duration::from_secs(5);
        let mut stats = FrameStats::new(t0);
        assert!(stats.record(t0 - Duration::from_secs(1)).is_none());
    }
}
