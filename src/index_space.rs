use core::ops::Range;




/**
 * Identifier for a horizontal axis of the ocean grid: `I` runs along the
 * x dimension (zonal on a regular grid), `J` along y.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    I,
    J,
}




/**
 * A rectangular region of (j, i) water-column indexes. Indexes are ordered
 * the way the arrays are stored, j (rows) first and i fastest, so the linear
 * node number of a column is its row-major offset.
 */
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexSpace {
    dj: Range<usize>,
    di: Range<usize>,
}




// ============================================================================
impl IndexSpace {


    pub fn new(dj: Range<usize>, di: Range<usize>) -> Self {

        assert!(
            dj.start <= dj.end && di.start <= di.end,
            "index space has negative volume");

        Self { dj, di }
    }


    /**
     * The index space covering an array of the given `(ny, nx)` shape.
     */
    pub fn from_shape(shape: (usize, usize)) -> Self {
        Self::new(0..shape.0, 0..shape.1)
    }


    /**
     * Return the number of indexes on each axis, as `(ny, nx)`.
     */
    pub fn dim(&self) -> (usize, usize) {
        (self.dj.end - self.dj.start, self.di.end - self.di.start)
    }


    pub fn len(&self) -> usize {
        let (m, n) = self.dim();
        m * n
    }


    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /**
     * Determine whether this index space contains the given `(j, i)` index.
     */
    pub fn contains(&self, index: (usize, usize)) -> bool {
        self.dj.contains(&index.0) && self.di.contains(&index.1)
    }


    /**
     * Return the linear node number of the given index: its offset in a
     * row-major buffer aligned with the start of this index space.
     */
    pub fn row_major_offset(&self, index: (usize, usize)) -> usize {
        let j = index.0 - self.dj.start;
        let i = index.1 - self.di.start;
        let (_, n) = self.dim();
        j * n + i
    }


    /**
     * Inverse of `row_major_offset`.
     */
    pub fn index_at(&self, offset: usize) -> (usize, usize) {
        let (_, n) = self.dim();
        (self.dj.start + offset / n, self.di.start + offset % n)
    }


    /**
     * Return the index one step forward along `axis`. Past the upper edge
     * the step wraps to the lower edge when `periodic` is set, and there is
     * no neighbor otherwise. A wrap that lands back on the starting index
     * (an axis of length one) is not a neighbor.
     */
    pub fn next_along(&self, index: (usize, usize), axis: Axis, periodic: bool) -> Option<(usize, usize)> {
        let (j, i) = index;

        let next = match axis {
            Axis::I if i + 1 < self.di.end => (j, i + 1),
            Axis::I if periodic => (j, self.di.start),
            Axis::J if j + 1 < self.dj.end => (j + 1, i),
            Axis::J if periodic => (self.dj.start, i),
            _ => return None,
        };

        if next == index {
            None
        } else {
            Some(next)
        }
    }


    /**
     * Return an iterator which traverses the index space in row-major order
     * (C-like; the final index increases fastest).
     */
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.dj.clone().flat_map(move |j| self.di.clone().map(move |i| (j, i)))
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{Axis, IndexSpace};

    #[test]
    fn offsets_are_row_major() {
        let space = IndexSpace::from_shape((3, 4));
        assert_eq!(space.row_major_offset((0, 0)), 0);
        assert_eq!(space.row_major_offset((0, 3)), 3);
        assert_eq!(space.row_major_offset((2, 1)), 9);
        assert_eq!(space.index_at(9), (2, 1));
        assert_eq!(space.iter().count(), 12);
        assert_eq!(space.iter().nth(5), Some((1, 1)));
    }

    #[test]
    fn stepping_wraps_only_when_periodic() {
        let space = IndexSpace::from_shape((3, 4));
        assert_eq!(space.next_along((1, 2), Axis::I, false), Some((1, 3)));
        assert_eq!(space.next_along((1, 3), Axis::I, false), None);
        assert_eq!(space.next_along((1, 3), Axis::I, true), Some((1, 0)));
        assert_eq!(space.next_along((2, 3), Axis::J, true), Some((0, 3)));
        assert_eq!(space.next_along((2, 3), Axis::J, false), None);
    }

    #[test]
    fn single_column_axis_has_no_wrap_neighbor() {
        let space = IndexSpace::from_shape((3, 1));
        assert_eq!(space.next_along((0, 0), Axis::I, true), None);
    }

    #[test]
    fn offset_space_is_aligned_with_its_own_start() {
        let space = IndexSpace::new(2..4, 5..8);
        assert!(space.contains((3, 7)));
        assert!(!space.contains((1, 7)));
        assert_eq!(space.row_major_offset((3, 6)), 4);
        assert_eq!(space.index_at(4), (3, 6));
    }
}
