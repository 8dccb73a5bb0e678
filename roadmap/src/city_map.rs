use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{filler, road::RoadCode};

pub const MAP_SIZE: usize = 80;

/// Square road map. Cell `(x, y)` lives in row `y`, column `x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CityMap<const N: usize> {
    pub(crate) cells: [[RoadCode; N]; N],
}

pub type CityMap80 = CityMap<MAP_SIZE>;

impl<const N: usize> CityMap<N> {
    pub fn new() -> Self {
        CityMap {
            cells: [[RoadCode::NONE; N]; N],
        }
    }

    /// Builds a fully generated map from the given random source.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut map = Self::new();
        filler::fill(&mut map, rng);
        map
    }

    /// Builds a fully generated map from an OS-seeded generator.
    pub fn generate_random() -> Self {
        let mut rng = SmallRng::from_os_rng();
        Self::generate(&mut rng)
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> RoadCode {
        self.cells[y][x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, code: RoadCode) {
        self.cells[y][x] = code;
    }

    pub fn rows(&self) -> impl Iterator<Item = &[RoadCode; N]> {
        self.cells.iter()
    }

    /// Coordinates of every cell still holding [`RoadCode::NONE`].
    pub fn unassigned_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, code)| !code.is_assigned())
                .map(move |(x, _)| (x, y))
        })
    }

    pub fn reset(&mut self) {
        self.cells
            .iter_mut()
            .for_each(|row| row.fill(RoadCode::NONE));
    }
}

impl<const N: usize> Default for CityMap<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> fmt::Display for CityMap<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for code in row {
                write!(f, "{} ", code)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
