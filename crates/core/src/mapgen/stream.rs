//! Pseudo-random stream threaded through the whole batch run.

/// Deterministic 32-bit bit-mixing recurrence. Not statistically validated;
/// level layouts depend on reproducing this exact sequence, so every step
/// uses wrapping 32-bit arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RandomStream {
    state: u32,
}

impl RandomStream {
    /// Starts the stream from the bitwise complement of `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: !seed }
    }

    /// Advances the recurrence one step and returns the new state word.
    pub fn next_value(&mut self) -> u32 {
        self.state = self.state.wrapping_add(self.state);
        self.state ^= 1;
        if (self.state as i32) < 0 {
            self.state ^= 0x8888_8EEF;
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn seed_18_matches_reference_trace() {
        let mut stream = RandomStream::new(18);
        let head: Vec<u32> = (0..12).map(|_| stream.next_value()).collect();
        assert_eq!(
            head,
            [
                2_004_316_468,
                1_717_988_486,
                1_145_329_634,
                8_490,
                16_981,
                33_963,
                67_927,
                135_855,
                271_711,
                543_423,
                1_086_847,
                2_173_695,
            ]
        );
    }

    #[test]
    fn seed_0_matches_reference_trace() {
        let mut stream = RandomStream::new(0);
        let head: Vec<u32> = (0..3).map(|_| stream.next_value()).collect();
        assert_eq!(head, [2_004_316_432, 1_717_988_558, 1_145_329_522]);
    }

    #[test]
    fn same_seed_produces_identical_sequences() {
        let mut left = RandomStream::new(77_777);
        let mut right = RandomStream::new(77_777);
        for _ in 0..10_000 {
            assert_eq!(left.next_value(), right.next_value());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut left = RandomStream::new(1);
        let mut right = RandomStream::new(2);
        let left_head: Vec<u32> = (0..16).map(|_| left.next_value()).collect();
        let right_head: Vec<u32> = (0..16).map(|_| right.next_value()).collect();
        assert_ne!(left_head, right_head);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1024))]
        #[test]
        fn produced_values_always_have_the_top_bit_folded_away(seed in any::<u32>()) {
            let mut stream = RandomStream::new(seed);
            for _ in 0..64 {
                let value = stream.next_value();
                prop_assert!(value < 1 << 31, "high bit must be cleared by the fold, got {value:#x}");
            }
        }
    }
}
