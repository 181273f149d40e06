use std::time::Duration;

/// Length of one full automatic revolution.
pub const SPIN_PERIOD_MS: u128 = 4000;

/// Degrees per millisecond of automatic rotation.
pub const SPIN_DEGREES_PER_MS: f32 = 0.090;

/// Time-driven angle used instead of touch input.
///
/// One revolution every four seconds; the angle restarts at zero each period.
pub fn auto_spin_angle(elapsed: Duration) -> f32 {
    let phase = (elapsed.as_millis() % SPIN_PERIOD_MS) as f32;
    SPIN_DEGREES_PER_MS * phase
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        assert_eq!(auto_spin_angle(Duration::ZERO), 0.0);
    }

    #[test]
    fn quarter_period_is_ninety_degrees() {
        let a = auto_spin_angle(Duration::from_millis(1000));
        assert!((a - 90.0).abs() < 1e-3);
    }

    #[test]
    fn wraps_every_period() {
        let a = auto_spin_angle(Duration::from_millis(500));
        let b = auto_spin_angle(Duration::from_millis(4500));
        assert_eq!(a, b);
    }

    #[test]
    fn stays_below_full_turn() {
        let a = auto_spin_angle(Duration::from_millis(3999));
        assert!(a < 360.0);
    }
}
