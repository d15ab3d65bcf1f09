use std::ops;

use crate::dims::Dims;

/// Row-major arena of cells, addressed by `Dims(x, y)`.
#[derive(Debug, Clone)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Builds the array from rows, returns `None` if the rows aren't all the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|r| r.len()).unwrap_or(0);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }

        Some(Self {
            buf: rows.into_iter().flatten().collect(),
            width,
            height,
        })
    }

    pub fn size(&self) -> Dims {
        Dims(self.width as i32, self.height as i32)
    }

    pub fn dim_to_idx(&self, pos: Dims) -> Option<usize> {
        if !pos.all_non_negative() {
            return None;
        }

        let Dims(x, y) = pos;
        let (x, y) = (x as usize, y as usize);

        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Dims> {
        if idx >= self.buf.len() {
            return None;
        }

        let x = idx % self.width;
        let y = idx / self.width;

        Some(Dims(x as i32, y as i32))
    }

    pub fn get(&self, pos: Dims) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Dims) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Dims> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // `max(1)` keeps `chunks` happy on a zero-width array, which has no rows anyway
        self.buf.chunks(self.width.max(1))
    }
}

impl<T> ops::Index<Dims> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Dims) -> &Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get(i))
            .expect("Index out of bounds")
    }
}

impl<T> ops::IndexMut<Dims> for Array2D<T> {
    fn index_mut(&mut self, index: Dims) -> &mut Self::Output {
        self.dim_to_idx(index)
            .and_then(|i| self.buf.get_mut(i))
            .expect("Index out of bounds")
    }
}

#[cfg(test)]
mod tests {
    use super::{Array2D, Dims};

    #[test]
    fn index_roundtrip() {
        let arr = Array2D::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]]).unwrap();
        assert_eq!(arr.size(), Dims(3, 2));
        assert_eq!(arr[Dims(1, 1)], 4);
        assert_eq!(arr.dim_to_idx(Dims(2, 1)), Some(5));
        assert_eq!(arr.idx_to_dim(5), Some(Dims(2, 1)));
        assert_eq!(arr.get(Dims(3, 0)), None);
        assert_eq!(arr.get(Dims(-1, 0)), None);
    }

    #[test]
    fn ragged_rows_rejected() {
        assert!(Array2D::from_rows(vec![vec![0, 1], vec![2]]).is_none());
    }

    #[test]
    fn rows_follow_width() {
        let arr = Array2D::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        let rows: Vec<_> = arr.rows().collect();
        assert_eq!(rows, vec![&['a', 'b'][..], &['c', 'd'][..]]);
    }
}
