/// Frame timing for the variable-step game loop
///
/// Each frame measures the wall time since the previous one and hands it to
/// gameplay as `dt`. The value is clamped so it is always strictly positive
/// (gameplay divides by it) and never large enough to tunnel through geometry
/// after a stall.
use std::time::{Duration, Instant};

/// Smallest delta time handed to gameplay (1000 FPS)
pub const MIN_FRAME_TIME: f32 = 1.0 / 1000.0;

/// Largest delta time handed to gameplay (10 FPS)
pub const MAX_FRAME_TIME: f32 = 1.0 / 10.0;

/// How often the FPS counter is refreshed
const FPS_REPORT_INTERVAL: f32 = 1.0;

/// Frame timing state
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Whether gameplay is paused
    paused: bool,

    /// Total frames ticked
    frame_count: u64,

    /// Frames and seconds since the last FPS report
    frames_since_report: u32,
    time_since_report: f32,

    /// Last measured FPS
    current_fps: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            frames_since_report: 0,
            time_since_report: 0.0,
            current_fps: 0.0,
        }
    }

    /// Begin a new frame.
    ///
    /// Returns the clamped delta time to simulate, or `None` while paused.
    pub fn tick(&mut self) -> Option<f32> {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.advance(elapsed)
    }

    /// Account for `elapsed` wall time; split from `tick` for determinism
    pub fn advance(&mut self, elapsed: Duration) -> Option<f32> {
        let dt = clamp_frame_time(elapsed.as_secs_f32());
        self.frame_count += 1;
        self.record_fps(dt);

        if self.paused {
            None
        } else {
            Some(dt)
        }
    }

    fn record_fps(&mut self, dt: f32) {
        self.frames_since_report += 1;
        self.time_since_report += dt;

        if self.time_since_report >= FPS_REPORT_INTERVAL {
            self.current_fps = self.frames_since_report as f32 / self.time_since_report;
            log::info!("FPS: {:.3}", self.current_fps);
            self.frames_since_report = 0;
            self.time_since_report = 0.0;
        }
    }

    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game paused");
        }
    }

    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Don't simulate the time spent paused
            self.last_frame_time = Instant::now();
            log::info!("Game resumed");
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Clamp a measured frame time into the range gameplay accepts
pub fn clamp_frame_time(seconds: f32) -> f32 {
    if seconds.is_finite() {
        seconds.clamp(MIN_FRAME_TIME, MAX_FRAME_TIME)
    } else {
        MIN_FRAME_TIME
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_clamp_frame_time() {
        assert_eq!(clamp_frame_time(0.0), MIN_FRAME_TIME);
        assert_eq!(clamp_frame_time(-1.0), MIN_FRAME_TIME);
        assert_eq!(clamp_frame_time(f32::NAN), MIN_FRAME_TIME);
        assert_eq!(clamp_frame_time(5.0), MAX_FRAME_TIME);
        assert_eq!(clamp_frame_time(0.016), 0.016);
    }

    #[test]
    fn test_advance_returns_positive_dt() {
        let mut clock = FrameClock::new();
        let dt = clock.advance(Duration::ZERO);
        assert_eq!(dt, Some(MIN_FRAME_TIME));
        assert_eq!(clock.frame_count(), 1);
    }

    #[test]
    fn test_paused_no_updates() {
        let mut clock = FrameClock::new();
        clock.pause();
        assert_eq!(clock.advance(Duration::from_millis(16)), None);
        // Frames still count while paused
        assert_eq!(clock.frame_count(), 1);

        clock.resume();
        assert!(clock.advance(Duration::from_millis(16)).is_some());
    }

    #[test]
    fn test_toggle_pause() {
        let mut clock = FrameClock::new();
        clock.toggle_pause();
        assert!(clock.is_paused());
        clock.toggle_pause();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_fps_reported_after_one_second() {
        let mut clock = FrameClock::new();
        // The report lands on frame 20 or 21 depending on float rounding
        for _ in 0..25 {
            clock.advance(Duration::from_millis(50));
        }
        assert_relative_eq!(clock.fps(), 20.0, epsilon = 0.1);
    }

    #[test]
    fn test_tick_measures_wall_time() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(5));
        let dt = clock.tick().unwrap_or_default();
        assert!(dt >= MIN_FRAME_TIME && dt <= MAX_FRAME_TIME);
    }
}
