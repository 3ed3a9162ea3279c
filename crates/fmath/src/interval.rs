use crate::scalar::EPSILON;

/// A closed parametric range `[min, max]` along a ray.
///
/// The ray/box slab test narrows one of these per axis: `min` is the entry
/// distance and `max` the exit distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    /// Create a new interval given min and max values.
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Narrows the interval to the part where a 1D ray lies inside a slab.
    ///
    /// The ray starts at `start` and moves by `dir` per unit distance; the slab
    /// spans `[slab_min, slab_max]`. A direction with magnitude below
    /// [`EPSILON`] cannot leave the slab, so the test reduces to whether the
    /// start already lies inside it. Returns false, leaving the interval
    /// untouched, when the ray misses the slab within the current range.
    pub fn intersect_slab(&mut self, start: f32, dir: f32, slab_min: f32, slab_max: f32) -> bool {
        if dir * dir < EPSILON * EPSILON {
            return start >= slab_min && start <= slab_max;
        }

        let mut t0 = (slab_min - start) / dir;
        let mut t1 = (slab_max - start) / dir;
        if t0 > t1 {
            std::mem::swap(&mut t0, &mut t1);
        }

        if t0 > self.max || t1 < self.min {
            return false;
        }

        if t0 > self.min {
            self.min = t0;
        }
        if t1 < self.max {
            self.max = t1;
        }
        true
    }

    /// Every non-negative distance a ray can reach.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: f32::MAX,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slab_narrows_range() {
        let mut t = Interval::FORWARD;
        assert!(t.intersect_slab(-5.0, 1.0, 0.0, 1.0));
        assert_eq!(t.min, 5.0);
        assert_eq!(t.max, 6.0);

        // Second slab overlapping only partly
        assert!(t.intersect_slab(-5.5, 1.0, 0.0, 1.0));
        assert_eq!(t.min, 5.5);
        assert_eq!(t.max, 6.0);
    }

    #[test]
    fn test_slab_negative_direction_swaps() {
        let mut t = Interval::FORWARD;
        assert!(t.intersect_slab(5.0, -1.0, 0.0, 1.0));
        assert_eq!(t.min, 4.0);
        assert_eq!(t.max, 5.0);
    }

    #[test]
    fn test_slab_miss() {
        let mut t = Interval::new(0.0, 2.0);
        assert!(!t.intersect_slab(-5.0, 1.0, 0.0, 1.0));
        assert_eq!(t, Interval::new(0.0, 2.0));

        // Slab entirely behind the start
        let mut t = Interval::FORWARD;
        assert!(!t.intersect_slab(5.0, 1.0, 0.0, 1.0));
    }

    #[test]
    fn test_slab_parallel_direction() {
        let mut t = Interval::FORWARD;
        assert!(t.intersect_slab(0.5, 0.0, 0.0, 1.0));
        assert!(t.intersect_slab(1.0, 0.0, 0.0, 1.0));
        assert!(!t.intersect_slab(1.5, 0.0, 0.0, 1.0));
        assert_eq!(t, Interval::FORWARD);
    }
}
