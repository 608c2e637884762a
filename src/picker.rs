use super::Door;
use rand::Rng;
use std::collections::VecDeque;

/// Uniform source of door indices.
///
/// Every random choice in a round goes through [`Picker::pick`], so any
/// implementation must draw each of `0..n` with equal probability.
pub trait Picker {
    /// Draws a door uniformly from `0..n`.
    fn pick(&mut self, n: usize) -> Door;

    /// Draws a door uniformly from the doors of `0..n` not in `excluded`.
    ///
    /// Samples the allowed set directly rather than redrawing until a
    /// door is allowed: one draw over the count of allowed doors, mapped
    /// to the i-th allowed door. Repeated exclusions count once.
    fn pick_except(&mut self, n: usize, excluded: &[Door]) -> Door {
        let mut allowed = (0..n).filter(|door| !excluded.contains(door));
        let count = allowed.clone().count();
        assert!(count > 0, "every one of {} doors is excluded", n);
        let i = self.pick(count);
        allowed.nth(i).expect("pick within allowed count")
    }
}

impl Picker for rand::rngs::ThreadRng {
    fn pick(&mut self, n: usize) -> Door {
        self.random_range(0..n)
    }
}

impl Picker for rand::rngs::SmallRng {
    fn pick(&mut self, n: usize) -> Door {
        self.random_range(0..n)
    }
}

/// Replays a fixed sequence of draws.
///
/// Each call to [`Picker::pick`] consumes the next scripted value. Running
/// out of draws, or scripting a value outside the requested range, panics.
#[derive(Debug, Clone, Default)]
pub struct Scripted(VecDeque<Door>);

impl Scripted {
    /// Draws not yet consumed.
    pub fn remaining(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<Door>> for Scripted {
    fn from(draws: Vec<Door>) -> Self {
        Self(VecDeque::from(draws))
    }
}

impl Picker for Scripted {
    fn pick(&mut self, n: usize) -> Door {
        let door = self.0.pop_front().expect("scripted draws exhausted");
        assert!(door < n, "scripted draw {} outside 0..{}", door, n);
        door
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn pick_is_in_range() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        assert!((0..1000).map(|_| rng.pick(7)).all(|door| door < 7));
    }

    #[test]
    fn pick_is_uniform() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut counts = [0usize; 5];
        (0..50_000).for_each(|_| counts[rng.pick(5)] += 1);
        for count in counts {
            let rate = count as f32 / 50_000.;
            assert!((rate - 0.2).abs() < 0.01, "{} ≠ 0.2", rate);
        }
    }

    #[test]
    fn pick_except_skips_excluded() {
        let ref mut rng = SmallRng::seed_from_u64(2);
        let mut seen = [false; 6];
        for _ in 0..1000 {
            let door = rng.pick_except(6, &[1, 4]);
            assert!(door != 1 && door != 4);
            seen[door] = true;
        }
        assert_eq!(seen, [true, false, true, true, false, true]);
    }

    #[test]
    fn pick_except_counts_duplicates_once() {
        let ref mut scripted = Scripted::from(vec![1]);
        assert_eq!(scripted.pick_except(3, &[0, 0]), 2);
    }

    #[test]
    fn pick_except_maps_to_ith_allowed() {
        let ref mut scripted = Scripted::from(vec![0, 1, 2]);
        assert_eq!(scripted.pick_except(5, &[0, 2]), 1);
        assert_eq!(scripted.pick_except(5, &[0, 2]), 3);
        assert_eq!(scripted.pick_except(5, &[0, 2]), 4);
        assert_eq!(scripted.remaining(), 0);
    }

    #[test]
    #[should_panic]
    fn pick_except_nothing_allowed() {
        SmallRng::seed_from_u64(3).pick_except(2, &[0, 1]);
    }

    #[test]
    #[should_panic]
    fn scripted_exhausted() {
        Scripted::default().pick(3);
    }

    #[test]
    #[should_panic]
    fn scripted_out_of_range() {
        Scripted::from(vec![3]).pick(3);
    }
}
