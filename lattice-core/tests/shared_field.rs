//! Concurrent use of a shared noise field.
//!
//! A field is immutable after construction; callers parallelize by giving
//! each worker its own output region and generator state.

use rayon::prelude::*;

use lattice_core::{CubicNoise, NoiseArray2D};

const TILE: usize = 32;

fn tile_range(index: usize) -> std::ops::Range<f32> {
    let start = index as f32 * 4.0;
    start..start + 4.0
}

#[test]
fn parallel_tiles_match_sequential_tiles() {
    let noise = CubicNoise::new(2024);
    let tiles: Vec<(usize, usize)> = (0..4)
        .flat_map(|ty| (0..4).map(move |tx| (tx, ty)))
        .collect();

    let parallel: Vec<NoiseArray2D> = tiles
        .par_iter()
        .map(|&(tx, ty)| {
            noise
                .generate_2d(TILE, TILE, tile_range(tx), tile_range(ty))
                .expect("valid request")
        })
        .collect();

    for (&(tx, ty), array) in tiles.iter().zip(&parallel) {
        let expected = noise
            .generate_2d(TILE, TILE, tile_range(tx), tile_range(ty))
            .expect("valid request");
        assert_eq!(*array, expected, "tile ({tx}, {ty}) differs");
    }
}

#[test]
fn parallel_point_sampling_is_deterministic() {
    let noise = CubicNoise::new(-1);
    let field = noise.field();

    let coords: Vec<(f32, f32, f32)> = (0..256)
        .map(|i| {
            let i = i as f32;
            (i * 0.37 - 40.0, i * 0.11, 3.0 - i * 0.05)
        })
        .collect();

    let parallel: Vec<u32> = coords
        .par_iter()
        .map(|&(x, y, z)| field.cubic_noise_3d(x, y, z).to_bits())
        .collect();
    let sequential: Vec<u32> = coords
        .iter()
        .map(|&(x, y, z)| field.cubic_noise_3d(x, y, z).to_bits())
        .collect();
    assert_eq!(parallel, sequential);
}
