//! Injectable randomness for frontage jitter.
//!
//! Purpose
//! - Thread an explicit random source through segmentation so callers can seed
//!   it (`StdRng::seed_from_u64`) and replay a block pass exactly.
//! - Keep the draw rule (`target ± variation·target`) in one place.

use rand::Rng;

use crate::error::BlockError;

/// Source of uniform draws in `[0, 1)`.
///
/// Every `rand::Rng` is a source; pass `&mut StdRng` (or any other generator).
pub trait UniformSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Jittered step length: uniform in `[target − v, target + v)` with `v = variation·target`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jitter {
    target: f64,
    spread: f64,
}

impl Jitter {
    /// Validates `target > 0` (finite) and `variation ∈ [0, 1)`.
    pub fn new(target: f64, variation: f64) -> Result<Self, BlockError> {
        if !target.is_finite() || target <= 0.0 {
            return Err(BlockError::invalid_param(format!(
                "target segment length must be finite and > 0 (got {target})"
            )));
        }
        if !(0.0..1.0).contains(&variation) {
            return Err(BlockError::invalid_param(format!(
                "variation fraction must lie in [0, 1) (got {variation})"
            )));
        }
        Ok(Self {
            target,
            spread: variation * target,
        })
    }

    /// Smallest length a draw can produce.
    #[inline]
    pub fn min_step(&self) -> f64 {
        self.target - self.spread
    }

    /// Largest length a draw can produce.
    #[inline]
    pub fn max_step(&self) -> f64 {
        self.target + self.spread
    }

    /// One fresh draw; always `> 0` because `spread < target`.
    pub fn draw<R: UniformSource + ?Sized>(&self, rng: &mut R) -> f64 {
        let u = rng.next_uniform();
        let d = self.target - self.spread + u * 2.0 * self.spread;
        debug_assert!(d > 0.0, "jittered step must stay positive");
        d
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn rejects_bad_parameters() {
        assert!(matches!(
            Jitter::new(0.0, 0.1),
            Err(BlockError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Jitter::new(-3.0, 0.1),
            Err(BlockError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Jitter::new(f64::NAN, 0.1),
            Err(BlockError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Jitter::new(10.0, 1.0),
            Err(BlockError::InvalidParameter { .. })
        ));
        assert!(matches!(
            Jitter::new(10.0, -0.01),
            Err(BlockError::InvalidParameter { .. })
        ));
        assert!(Jitter::new(10.0, 0.0).is_ok());
    }

    #[test]
    fn zero_variation_is_exact() {
        let j = Jitter::new(7.5, 0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..16 {
            assert_eq!(j.draw(&mut rng), 7.5);
        }
    }

    #[test]
    fn draws_stay_in_band() {
        let j = Jitter::new(10.0, 0.25).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let d = j.draw(&mut rng);
            assert!((7.5..12.5).contains(&d), "draw {d} out of band");
        }
        assert_eq!(j.min_step(), 7.5);
        assert_eq!(j.max_step(), 12.5);
    }

    #[test]
    fn lowest_draw_from_constant_source() {
        // StepRng(0, 0) always yields zero bits, i.e. u = 0.
        let j = Jitter::new(10.0, 0.5).unwrap();
        let mut rng = StepRng::new(0, 0);
        assert_eq!(j.draw(&mut rng), 5.0);
    }
}
