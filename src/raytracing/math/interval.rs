/// Closed range of valid ray parameters.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Interval {
        Interval { min, max }
    }

    /// Search range for primary and reflected rays.
    pub fn positive() -> Interval {
        Interval::new(0.0, f64::INFINITY)
    }

    /// Search range for shadow rays: the lower bound skips
    /// self-intersections at the ray origin.
    pub fn shadow() -> Interval {
        Interval::new(0.001, f64::INFINITY)
    }

    /// True iff t lies strictly inside the range.
    pub fn surrounds(&self, t: f64) -> bool {
        self.min < t && t < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surrounds_is_strict() {
        let interval = Interval::new(0.0, 2.0);
        assert!(!interval.surrounds(0.0));
        assert!(!interval.surrounds(2.0));
        assert!(interval.surrounds(1.0));
        assert!(!interval.surrounds(-1.0));
        assert!(!interval.surrounds(3.0));
    }

    #[test]
    fn test_positive_accepts_any_positive_t() {
        let interval = Interval::positive();
        assert!(!interval.surrounds(0.0));
        assert!(interval.surrounds(1e-9));
        assert!(interval.surrounds(1e12));
    }
}
