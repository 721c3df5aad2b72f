//! Property tests for the level progression schedule.

use backend::domain::progression::{level_for_experience, progression};
use proptest::prelude::*;

proptest! {
    #[test]
    fn until_next_level_is_never_negative(e in 0..=10_000_000i32) {
        let p = progression(e);
        prop_assert!(p.until_next_level >= 0, "experience {} gave {:?}", e, p);
    }

    /// The level is the largest n whose cumulative cost 50*n*(n+1) is covered.
    #[test]
    fn level_is_the_largest_affordable_tier(e in 0..=10_000_000i32) {
        let level = i64::from(level_for_experience(e));
        let e = i64::from(e);
        prop_assert!(50 * level * (level + 1) <= e);
        prop_assert!(50 * (level + 1) * (level + 2) > e);
    }

    #[test]
    fn level_never_decreases_with_experience(e in 1..=10_000_000i32) {
        prop_assert!(level_for_experience(e) >= level_for_experience(e - 1));
    }

    /// Spending the reported remainder lands exactly on the next level.
    #[test]
    fn paying_until_next_level_levels_up_exactly_once(e in 0..=9_000_000i32) {
        let p = progression(e);
        let leveled = progression(e + p.until_next_level);
        prop_assert_eq!(leveled.level, p.level + 1);
        prop_assert_eq!(
            leveled.until_next_level,
            50 * (leveled.level + 1) * (leveled.level + 2) - (e + p.until_next_level)
        );
    }
}
