use std::ops::Add;

/// Offset coordinate of a hex cell, `Dims(col, row)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dims(pub i32, pub i32);

impl Dims {
    pub const ZERO: Dims = Dims(0, 0);

    pub fn all_non_negative(self) -> bool {
        self.0 >= 0 && self.1 >= 0
    }

    pub fn is_odd_row(self) -> bool {
        self.1 & 1 == 1
    }
}

impl Add for Dims {
    type Output = Dims;

    fn add(self, other: Dims) -> Dims {
        Dims(self.0 + other.0, self.1 + other.1)
    }
}
