use std::time::{Duration, Instant};

/// Runs `f` once and returns its output with the elapsed wall-clock time.
#[inline]
pub fn time_it<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_output_and_duration() {
        let (value, elapsed) = time_it(|| {
            std::thread::sleep(Duration::from_millis(2));
            7
        });
        assert_eq!(value, 7);
        assert!(elapsed >= Duration::from_millis(2));
        assert!(elapsed.as_micros() >= 2000);
    }
}
