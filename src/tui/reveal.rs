//! Staggered reveal of list items.
//!
//! Item `i` becomes visible once `delay + i * step` has elapsed since the list
//! was shown. The schedule is a pure function of elapsed time; callers decide
//! how often to ask.

use std::ops::Range;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    delay: Duration,
    step: Duration,
}

impl RevealSchedule {
    pub fn new(delay: Duration, step: Duration) -> Self {
        Self { delay, step }
    }

    pub fn appears_at(&self, index: usize) -> Duration {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.delay.saturating_add(self.step.saturating_mul(index))
    }

    pub fn is_visible(&self, index: usize, elapsed: Duration) -> bool {
        elapsed >= self.appears_at(index)
    }

    /// Number of the first `total` items visible after `elapsed`.
    pub fn visible_count(&self, elapsed: Duration, total: usize) -> usize {
        if total == 0 || elapsed < self.delay {
            return 0;
        }
        if self.step.is_zero() {
            return total;
        }

        let since = (elapsed - self.delay).as_nanos();
        let shown = since / self.step.as_nanos() + 1;
        usize::try_from(shown).map_or(total, |shown| shown.min(total))
    }

    /// Indices visible after `elapsed`. Items always appear in order.
    pub fn visible(&self, elapsed: Duration, total: usize) -> Range<usize> {
        0..self.visible_count(elapsed, total)
    }

    /// Whether every one of `total` items is visible.
    pub fn is_complete(&self, elapsed: Duration, total: usize) -> bool {
        self.visible_count(elapsed, total) == total
    }
}

impl Default for RevealSchedule {
    fn default() -> Self {
        Self::new(Duration::from_millis(200), Duration::from_millis(180))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_nothing_before_initial_delay() {
        let schedule = RevealSchedule::default();
        assert_eq!(schedule.visible_count(ms(0), 8), 0);
        assert_eq!(schedule.visible_count(ms(199), 8), 0);
        assert!(schedule.visible(ms(199), 8).is_empty());
    }

    #[test]
    fn test_items_appear_on_schedule() {
        let schedule = RevealSchedule::default();
        assert_eq!(schedule.visible_count(ms(200), 8), 1);
        assert_eq!(schedule.visible_count(ms(379), 8), 1);
        assert_eq!(schedule.visible_count(ms(380), 8), 2);
        assert_eq!(schedule.visible(ms(560), 8), 0..3);
        assert_eq!(schedule.appears_at(7), ms(200 + 7 * 180));
    }

    #[test]
    fn test_count_agrees_with_per_item_check() {
        let schedule = RevealSchedule::default();
        for elapsed in (0..2000).step_by(37).map(ms) {
            let count = schedule.visible_count(elapsed, 8);
            for index in 0..8 {
                assert_eq!(schedule.is_visible(index, elapsed), index < count);
            }
        }
    }

    #[test]
    fn test_capped_at_total() {
        let schedule = RevealSchedule::default();
        assert_eq!(schedule.visible_count(ms(60_000), 8), 8);
        assert!(schedule.is_complete(ms(200 + 7 * 180), 8));
        assert!(!schedule.is_complete(ms(200 + 7 * 180 - 1), 8));
        assert_eq!(schedule.visible_count(ms(60_000), 0), 0);
    }

    #[test]
    fn test_zero_step_reveals_everything_at_once() {
        let schedule = RevealSchedule::new(ms(50), Duration::ZERO);
        assert_eq!(schedule.visible_count(ms(49), 5), 0);
        assert_eq!(schedule.visible_count(ms(50), 5), 5);
    }
}
