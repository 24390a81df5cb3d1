use std::cmp::Ordering;
use std::fmt::{Debug, Error, Formatter};

use super::dir::Dir;
use Dir::*;

/// A cell on the board, y grows downwards.
#[derive(Eq, PartialEq, Copy, Clone, Hash, Add, Sub)]
pub struct GridPoint {
    pub x: isize,
    pub y: isize,
}

pub type GridDim = GridPoint;

impl GridPoint {
    #[must_use]
    pub fn translate(self, dir: Dir, dist: isize) -> Self {
        let Self { x, y } = self;
        match dir {
            U => Self { x, y: y - dist },
            D => Self { x, y: y + dist },
            L => Self { x: x - dist, y },
            R => Self { x: x + dist, y },
        }
    }
}

impl Debug for GridPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

// row-major, top-left is the smallest
impl Ord for GridPoint {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.y.cmp(&other.y) {
            Ordering::Equal => self.x.cmp(&other.x),
            ord => ord,
        }
    }
}

impl PartialOrd for GridPoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[test]
fn test_arithmetic() {
    let a = GridPoint { x: 1, y: 2 };
    let b = GridPoint { x: 3, y: 4 };
    assert_eq!(a + b, GridPoint { x: 4, y: 6 });
    assert_eq!(b - a, GridPoint { x: 2, y: 2 });
}

#[test]
fn test_translate() {
    let point = GridPoint { x: 10, y: 10 };
    assert_eq!(point.translate(R, 1), GridPoint { x: 11, y: 10 });
    assert_eq!(point.translate(L, 2), GridPoint { x: 8, y: 10 });
    assert_eq!(point.translate(U, 1), GridPoint { x: 10, y: 9 });
    assert_eq!(point.translate(D, 3), GridPoint { x: 10, y: 13 });
    // translating back and forth is a no-op
    assert_eq!(point.translate(R, 5).translate(-R, 5), point);
}
