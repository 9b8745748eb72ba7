use std::ops::RangeInclusive;

use rand::Rng;

/// Source of the small presentation offset added to wait-time estimates.
pub trait JitterSource: Send + Sync {
    /// Returns an offset inside `range`.
    fn next_offset(&self, range: RangeInclusive<i32>) -> i32;
}

/// Uniform offset from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngJitter;

impl JitterSource for ThreadRngJitter {
    fn next_offset(&self, range: RangeInclusive<i32>) -> i32 {
        if range.is_empty() {
            return 0;
        }
        rand::thread_rng().gen_range(range)
    }
}

/// Always the same offset, clamped into the requested range.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedJitter(pub i32);

impl JitterSource for FixedJitter {
    fn next_offset(&self, range: RangeInclusive<i32>) -> i32 {
        if range.is_empty() {
            return 0;
        }
        self.0.clamp(*range.start(), *range.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_jitter_is_clamped() {
        assert_eq!(FixedJitter(7).next_offset(-2..=2), 2);
        assert_eq!(FixedJitter(-7).next_offset(-2..=2), -2);
        assert_eq!(FixedJitter(1).next_offset(-2..=2), 1);
    }

    #[test]
    fn thread_rng_stays_in_range() {
        let jitter = ThreadRngJitter;
        for _ in 0..200 {
            let offset = jitter.next_offset(-2..=2);
            assert!((-2..=2).contains(&offset));
        }
    }
}
