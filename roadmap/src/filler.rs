use rand::Rng;
use tracing::{instrument, trace};

use crate::{city_map::CityMap, error::MapError, road};

/// Fills the L-shaped frontier at `index`: column `x == index` for every
/// `y > index`, then row `y == index` for every `x >= index`.
///
/// Every cell on the frontier ends with a non-zero code, except the far
/// corner which is sampled once and keeps its code.
pub fn fill_frontier<const N: usize, R: Rng + ?Sized>(
    map: &mut CityMap<N>,
    index: usize,
    rng: &mut R,
) -> Result<(), MapError> {
    if index >= N {
        return Err(MapError::IndexOutOfRange { index, size: N });
    }
    alloc(map, index, rng);
    Ok(())
}

/// Fills every frontier from the far corner inward to `(0, 0)`.
pub fn fill<const N: usize, R: Rng + ?Sized>(map: &mut CityMap<N>, rng: &mut R) {
    for index in (0..N).rev() {
        alloc(map, index, rng);
    }
}

#[instrument(level = "trace", skip(map, rng))]
fn alloc<const N: usize, R: Rng + ?Sized>(map: &mut CityMap<N>, index: usize, rng: &mut R) {
    let last = N - 1;
    if index == last {
        map.set(last, last, road::sample(last, last, N, rng));
        return;
    }

    let mut draws = 0usize;
    for i in (index + 1..N).rev() {
        draws += resample_while_unassigned(map, index, i, rng);
    }
    for i in (index..N).rev() {
        draws += resample_while_unassigned(map, i, index, rng);
    }
    trace!(draws, "frontier filled");
}

// Loops forever if the candidate set of (x, y) holds no road.
fn resample_while_unassigned<const N: usize, R: Rng + ?Sized>(
    map: &mut CityMap<N>,
    x: usize,
    y: usize,
    rng: &mut R,
) -> usize {
    let mut draws = 0;
    while !map.get(x, y).is_assigned() {
        map.set(x, y, road::sample(x, y, N, rng));
        draws += 1;
    }
    draws
}
