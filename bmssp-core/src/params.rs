//! Derived solver parameters.
//!
//! The recursion geometry is derived from the vertex count: `k` caps the
//! level-0 expansion, `t` widens each recursion level, and `depth` is the
//! starting recursion level. The exponential per-level quantities saturate
//! at `usize::MAX` because `t` routinely exceeds the word size for graphs of
//! any interesting size; a saturated cap simply never binds.

/// Recursion parameters for a single solver run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct SolverParams {
    base_capacity: usize,
    level_width: u32,
    depth: u32,
}

impl SolverParams {
    /// Derives parameters for a graph of `vertex_count` vertices.
    ///
    /// `base_capacity` defaults to `max(1, floor(n^(1/3)))` and may be
    /// overridden; `level_width` is `max(1, floor(n^(2/3)))` and `depth` is
    /// `ceil(ln(n + 1) / (level_width + 1))`, at least one level.
    pub(crate) fn derive(vertex_count: usize, base_capacity_override: Option<usize>) -> Self {
        let n = vertex_count as u128;
        // n^(2/3) == cbrt(n^2), which keeps both roots exact at perfect
        // powers where a float powf lands just below the integer.
        let derived_capacity = usize::try_from(floor_cbrt(n)).unwrap_or(usize::MAX).max(1);
        let level_width = u32::try_from(floor_cbrt(n * n)).unwrap_or(u32::MAX).max(1);
        let depth_raw =
            ((vertex_count as f64 + 1.0).ln() / (f64::from(level_width) + 1.0)).ceil() as u32;

        Self {
            base_capacity: base_capacity_override.unwrap_or(derived_capacity),
            level_width,
            depth: depth_raw.max(1),
        }
    }

    /// Maximum vertices completed by a single level-0 expansion.
    #[rustfmt::skip]
    pub(crate) fn base_capacity(&self) -> usize { self.base_capacity }

    /// Starting recursion level.
    #[rustfmt::skip]
    pub(crate) fn depth(&self) -> u32 { self.depth }

    /// Frontier block capacity at `level`: `2^((level - 1) * t)`, saturating.
    pub(crate) fn batch_capacity(&self, level: u32) -> usize {
        debug_assert!(level >= 1, "batch capacity is defined for level >= 1");
        pow2_saturating(u64::from(level - 1) * u64::from(self.level_width))
    }

    /// Completion cap at `level`: `k * 2^(level * t)`, saturating.
    pub(crate) fn completion_cap(&self, level: u32) -> usize {
        self.base_capacity
            .saturating_mul(pow2_saturating(u64::from(level) * u64::from(self.level_width)))
    }
}

/// Integer cube root: the largest `root` with `root^3 <= value`.
///
/// Seeded from the float cube root and adjusted with exact integer cubes,
/// so perfect cubes resolve to their true root.
fn floor_cbrt(value: u128) -> u128 {
    let mut root = (value as f64).cbrt() as u128;
    while root.checked_pow(3).is_none_or(|cube| cube > value) {
        root -= 1;
    }
    while (root + 1).checked_pow(3).is_some_and(|cube| cube <= value) {
        root += 1;
    }
    root
}

/// `2^exp` clamped to `usize::MAX`.
fn pow2_saturating(exp: u64) -> usize {
    if exp >= u64::from(usize::BITS) {
        usize::MAX
    } else {
        1usize << exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::single_vertex(1, 1, 1, 1)]
    #[case::tiny(8, 2, 4, 1)]
    #[case::small(27, 3, 9, 1)]
    #[case::mid(1_000, 10, 100, 1)]
    #[case::large(1_000_000, 100, 10_000, 1)]
    fn derive_matches_reference_formulas(
        #[case] vertex_count: usize,
        #[case] expected_k: usize,
        #[case] expected_t: u32,
        #[case] expected_depth: u32,
    ) {
        let params = SolverParams::derive(vertex_count, None);
        assert_eq!(params.base_capacity(), expected_k);
        assert_eq!(params.level_width, expected_t);
        assert_eq!(params.depth(), expected_depth);
    }

    #[rstest]
    #[case::below_cube(7, 1, 3)]
    #[case::cube(8, 2, 4)]
    #[case::below_next_cube(26, 2, 8)]
    #[case::next_cube(27, 3, 9)]
    #[case::just_below_thousand(999, 9, 99)]
    fn derive_is_exact_at_perfect_power_boundaries(
        #[case] vertex_count: usize,
        #[case] expected_k: usize,
        #[case] expected_t: u32,
    ) {
        let params = SolverParams::derive(vertex_count, None);
        assert_eq!(params.base_capacity(), expected_k);
        assert_eq!(params.level_width, expected_t);
    }

    #[test]
    fn override_replaces_derived_base_capacity() {
        let params = SolverParams::derive(1_000, Some(3));
        assert_eq!(params.base_capacity(), 3);
        assert_eq!(params.level_width, 100);
    }

    #[test]
    fn batch_capacity_is_singleton_at_level_one() {
        let params = SolverParams::derive(1_000, None);
        assert_eq!(params.batch_capacity(1), 1);
    }

    #[test]
    fn exponential_quantities_saturate() {
        let params = SolverParams::derive(1_000_000, None);
        // t = 10_000, so 2^t overflows any word size.
        assert_eq!(params.batch_capacity(2), usize::MAX);
        assert_eq!(params.completion_cap(1), usize::MAX);
    }

    #[test]
    fn completion_cap_leaves_at_most_the_farthest_vertex() {
        // n - 1 completions suffice for a full map: once every closer
        // vertex is settled, the last tentative distance is already final.
        for n in 1..=64 {
            let params = SolverParams::derive(n, None);
            assert!(params.completion_cap(params.depth()) >= n - 1);
        }
    }
}
