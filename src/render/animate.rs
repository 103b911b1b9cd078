//! Count-up animation of an age on the terminal.
//!
//! Each counter rises from zero to its final value with an exponential
//! ease-out. The animation is cosmetic: it runs on its own tokio task and
//! the last frame always equals the computed age.

use crate::age::AgeResult;
use std::io::{self, Write};
use std::time::Duration;
use tokio::task::JoinHandle;

pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);
pub const DEFAULT_FPS: u32 = 30;
/// Longest accepted count-up. Longer durations are drawn at this length.
pub const MAX_DURATION: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    pub duration: Duration,
    pub fps: u32,
}

impl Default for CountUp {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            fps: DEFAULT_FPS,
        }
    }
}

/// Exponential ease-out, scaled so that `ease_out_expo(1.0) == 1.0`.
pub fn ease_out_expo(t: f64) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }
    let t = t.max(0.0);
    (1.0 - 2f64.powf(-10.0 * t)) * 1024.0 / 1023.0
}

fn eased(target: u32, progress: f64) -> u32 {
    let v = (target as f64 * ease_out_expo(progress)).round();
    (v as u32).min(target)
}

impl CountUp {
    fn frame_count(&self) -> u32 {
        let secs = self.duration.min(MAX_DURATION).as_secs_f64();
        let n = (secs * self.fps.max(1) as f64).ceil() as u32;
        n.max(1)
    }

    fn period(&self) -> Duration {
        // tokio intervals reject a zero period.
        (self.duration.min(MAX_DURATION) / self.frame_count()).max(Duration::from_millis(1))
    }

    /// Value shown on frame `i` of `n` (1-based). Frame `n` is `age` itself.
    pub fn frame_at(i: u32, n: u32, age: AgeResult) -> AgeResult {
        let progress = i as f64 / n.max(1) as f64;
        AgeResult {
            years: eased(age.years, progress),
            months: eased(age.months, progress),
            days: eased(age.days, progress),
        }
    }

    /// Draws the animation on stdout from a background task.
    pub fn spawn(self, age: AgeResult) -> JoinHandle<io::Result<()>> {
        let n = self.frame_count();
        let period = self.period();

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            let mut out = io::stdout();
            for i in 1..=n {
                ticker.tick().await;
                // Trailing spaces wipe digits left over from a longer frame.
                write!(out, "\r{}  ", Self::frame_at(i, n, age))?;
                out.flush()?;
            }
            writeln!(out)?;
            Ok(())
        })
    }
}
