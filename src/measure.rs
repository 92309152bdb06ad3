//! Wall-clock timing of a single call.

use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed wall-clock time of one measured call.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Elapsed {
    duration: Duration,
}

/// Runs `f` once and measures how long it took.
///
/// Uses the monotonic clock, so the result is never negative even if the system time changes.
#[inline(never)]
pub fn measure<R>(f: impl FnOnce() -> R) -> (R, Elapsed) {
    let start = Instant::now();

    let result = std::hint::black_box(f());

    let elapsed = Elapsed {
        duration: start.elapsed(),
    };

    (result, elapsed)
}

impl Elapsed {
    pub fn as_nanos(&self) -> u128 {
        self.duration.as_nanos()
    }

    pub fn as_duration(&self) -> Duration {
        self.duration
    }
}

impl From<Duration> for Elapsed {
    fn from(duration: Duration) -> Self {
        Self { duration }
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.as_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_result_of_call() {
        let (sum, _) = measure(|| (1..=10).sum::<i32>());
        assert_eq!(sum, 55);
    }

    #[test]
    fn covers_the_call() {
        let (_, elapsed) = measure(|| std::thread::sleep(Duration::from_millis(2)));
        assert!(elapsed.as_duration() >= Duration::from_millis(2));
    }

    #[test]
    fn displays_nanoseconds() {
        assert_eq!(Elapsed::from(Duration::from_micros(3)).to_string(), "3000ns");
    }
}
