//! Property-based tests for the sliding window and the coordinate tables.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lattice-core --test window_properties
//! ```

use proptest::prelude::*;

use lattice_core::{
    Axis, CubicNoise, CubicWindow, FloorFracTable, IntegerHash, MAX_SIZE, NoiseField,
};

/// Every cached entry must equal a fresh hash of its implied lattice point.
fn window_is_consistent(window: &CubicWindow<'_, IntegerHash>, field: &NoiseField) -> bool {
    let (fx, fy) = window.floor();
    (0..4).all(|i| {
        (0..4).all(|j| {
            let expected = field.point_hash_2d(fx + i as i32 - 1, fy + j as i32 - 1);
            window.value(i, j).to_bits() == expected.to_bits()
        })
    })
}

// ============================================================================
// 1. Window reuse correctness
// ============================================================================

proptest! {
    /// Random walks of small and large steps never leave stale entries.
    #[test]
    fn window_stays_consistent_over_random_moves(
        seed in any::<i32>(),
        start in (-10_000i32..10_000, -10_000i32..10_000),
        moves in prop::collection::vec((-6i32..=6, -6i32..=6), 1..40),
    ) {
        let field = NoiseField::new(seed);
        let mut window = CubicWindow::new(&field, start.0, start.1);
        prop_assert!(window_is_consistent(&window, &field));

        let (mut x, mut y) = start;
        for (dx, dy) in moves {
            x += dx;
            y += dy;
            window.move_to(x, y);
            prop_assert_eq!(window.floor(), (x, y));
            prop_assert!(
                window_is_consistent(&window, &field),
                "stale entry after moving by ({}, {}) to ({}, {})", dx, dy, x, y
            );
        }
    }

    /// A move computes exactly the entries outside the overlap.
    #[test]
    fn move_cost_matches_overlap(dx in -6i32..=6, dy in -6i32..=6) {
        let field = NoiseField::new(0);
        let mut window = CubicWindow::new(&field, 0, 0);
        window.move_to(dx, dy);

        let overlap = |d: i32| (4 - d.abs()).max(0) as usize;
        let reused = overlap(dx) * overlap(dy);
        prop_assert_eq!(window.hash_evaluations(), 16 + 16 - reused);
    }

    /// Sampling through the window equals direct bicubic point sampling.
    #[test]
    fn window_sample_matches_point_noise(
        seed in any::<i32>(),
        cell in (-500i32..500, -500i32..500),
        frac in (0u8..64, 0u8..64),
    ) {
        let field = NoiseField::new(seed);
        let window = CubicWindow::new(&field, cell.0, cell.1);
        // Multiples of 1/64 keep the coordinates exact in f32
        let fx = f32::from(frac.0) / 64.0;
        let fy = f32::from(frac.1) / 64.0;
        let expected = field.cubic_noise_2d(cell.0 as f32 + fx, cell.1 as f32 + fy);
        prop_assert_eq!(window.sample(fx, fy).to_bits(), expected.to_bits());
    }
}

// ============================================================================
// 2. Run-length table invariants
// ============================================================================

proptest! {
    /// Runs cover every sample, and floors never decrease along the axis.
    #[test]
    fn runs_partition_the_axis(
        size in 1usize..MAX_SIZE,
        start in -1000.0f32..1000.0,
        length in 0.01f32..500.0,
    ) {
        let table = FloorFracTable::new(Axis::X, size, start..start + length)
            .expect("valid table");

        prop_assert_eq!(table.runs().iter().sum::<usize>(), size);
        prop_assert!(table.runs().iter().all(|&run| run > 0));
        prop_assert!(table.floor().windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(table.frac().iter().all(|&f| (0.0..=1.0).contains(&f)));

        for (floor, range) in table.groups() {
            prop_assert!(table.floor()[range.clone()].iter().all(|&f| f == floor));
            if range.end < size {
                prop_assert_ne!(table.floor()[range.end], floor);
            }
        }
    }
}

// ============================================================================
// 3. Array generation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// The first sample equals point sampling at the range start, and no value is degenerate.
    #[test]
    fn array_origin_matches_point_noise(
        seed in any::<i32>(),
        width in 1usize..64,
        height in 1usize..64,
        x0 in -100.0f32..100.0,
        y0 in -100.0f32..100.0,
        span in 0.5f32..20.0,
    ) {
        let noise = CubicNoise::new(seed);
        let array = noise
            .generate_2d(width, height, x0..x0 + span, y0..y0 + span)
            .expect("valid request");
        let expected = noise.field().cubic_noise_2d(x0, y0);
        prop_assert_eq!(array.get(0, 0).to_bits(), expected.to_bits());
        prop_assert!(array.as_slice().iter().all(|v| v.is_finite()));
    }
}
