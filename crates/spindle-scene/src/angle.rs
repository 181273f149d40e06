use std::sync::atomic::{AtomicU32, Ordering};

/// Rotation angle in degrees shared between the input and draw roles.
///
/// The `f32` is stored as its bit pattern in a single atomic word, so a read
/// never observes a torn value. The angle is unbounded: it is never wrapped
/// or clamped.
#[derive(Debug, Default)]
pub struct SharedAngle {
    bits: AtomicU32,
}

impl SharedAngle {
    pub fn new(degrees: f32) -> Self {
        Self {
            bits: AtomicU32::new(degrees.to_bits()),
        }
    }

    /// Current angle in degrees.
    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Acquire))
    }

    #[inline]
    pub fn set(&self, degrees: f32) {
        self.bits.store(degrees.to_bits(), Ordering::Release);
    }

    /// Adds `delta` degrees and returns the new angle.
    pub fn add(&self, delta: f32) -> f32 {
        let mut current = self.bits.load(Ordering::Acquire);
        loop {
            let next = (f32::from_bits(current) + delta).to_bits();
            match self
                .bits
                .compare_exchange_weak(current, next, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return f32::from_bits(next),
                Err(actual) => current = actual,
            }
        }
    }
}
