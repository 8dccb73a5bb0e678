use std::fmt;

use rand::Rng;

/// Road code of a single cell.
///
/// The value is an opaque enumerant in `0..=3`. `0` means no road has been
/// assigned. Bit `1` links the cell to its neighbour along the y axis,
/// bit `2` links it to its neighbour along the x axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RoadCode(u8);

const LINK_Y: u8 = 0b01;
const LINK_X: u8 = 0b10;

static ANY: [u8; 4] = [0, 1, 2, 3];
static LAST_COLUMN: [u8; 2] = [0, LINK_Y];
static LAST_ROW: [u8; 2] = [0, LINK_X];

impl RoadCode {
    pub const NONE: RoadCode = RoadCode(0);
    pub const MAX: u8 = 3;

    pub fn new(code: u8) -> Option<Self> {
        (code <= Self::MAX).then_some(RoadCode(code))
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// Link between `(x, y)` and `(x, y + 1)`.
    #[inline]
    pub fn links_y(self) -> bool {
        self.0 & LINK_Y != 0
    }

    /// Link between `(x, y)` and `(x + 1, y)`.
    #[inline]
    pub fn links_x(self) -> bool {
        self.0 & LINK_X != 0
    }
}

impl fmt::Display for RoadCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Codes the cell at `(x, y)` of an `n x n` map may draw from.
///
/// The far corner has no candidates and always samples `0`.
pub fn candidates(x: usize, y: usize, n: usize) -> &'static [u8] {
    let last = n - 1;
    match (x == last, y == last) {
        (true, true) => &[],
        (true, false) => &LAST_COLUMN[..],
        (false, true) => &LAST_ROW[..],
        (false, false) => &ANY[..],
    }
}

/// Draws a code for `(x, y)` uniformly from its candidate set.
pub fn sample<R: Rng + ?Sized>(x: usize, y: usize, n: usize, rng: &mut R) -> RoadCode {
    let cands = candidates(x, y, n);
    if cands.is_empty() {
        return RoadCode::NONE;
    }
    RoadCode(cands[rng.random_range(0..cands.len())])
}
