//! Timestamp sources for article lifecycle stamping.
//!
//! # Invariants
//! - Timestamps are Unix epoch microseconds.
//! - `SystemClock` never returns the same value twice within one process.

use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of "now" used by stores when stamping `created_at`/`updated_at`.
pub trait Clock {
    fn now_micros(&self) -> i64;
}

static LAST_ISSUED_MICROS: AtomicI64 = AtomicI64::new(0);

/// Wall clock, strictly increasing within the current process.
///
/// A reading that does not advance past the previously issued value is
/// bumped to `previous + 1`, so back-to-back creates still order by
/// `created_at` and an update always moves `updated_at` forward.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_micros(&self) -> i64 {
        let wall = wall_clock_micros();
        let mut previous = LAST_ISSUED_MICROS.load(Ordering::Relaxed);
        loop {
            let next = if wall > previous { wall } else { previous + 1 };
            match LAST_ISSUED_MICROS.compare_exchange_weak(
                previous,
                next,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return next,
                Err(actual) => previous = actual,
            }
        }
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_micros(&self) -> i64 {
        (**self).now_micros()
    }
}

fn wall_clock_micros() -> i64 {
    // Clocks set before 1970 collapse to 0; the monotonic bump still applies.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_micros()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
