//! Read-only simulation clock snapshot.

/// Snapshot of the driver's simulation clock at the moment a diagnostic
/// is invoked.
///
/// The original diagnostics read the global time and step counters
/// directly; here the driver passes them explicitly so the passes carry
/// no ambient state. Whatever the driver supplies is what appears in
/// report headers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimClock {
    /// Physical simulation time.
    pub time: f64,
    /// Root-level step counter.
    pub step: u64,
}

impl SimClock {
    /// Snapshot at the given time and step.
    pub fn new(time: f64, step: u64) -> Self {
        Self { time, step }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_carries_driver_values_unchanged() {
        let clock = SimClock::new(1.25, 300);
        assert_eq!(clock.time, 1.25);
        assert_eq!(clock.step, 300);
    }
}
