/**
 * The largest number of spatial axes a grid may have.
 */
pub const MAX_RANK: usize = 3;




#[derive(Clone, Debug, PartialEq, Eq)]


/**
 * Represents the rectangular set of cell indexes of a 1D, 2D, or 3D grid.
 * Every axis starts at zero. Multi-indexes are given as `[usize; MAX_RANK]`
 * arrays where entries past the rank are zero.
 */
pub struct IndexSpace {
    dims: Vec<usize>,
}




// ============================================================================
impl IndexSpace {


    pub fn new(dims: &[usize]) -> Self {

        assert!(
            (1..=MAX_RANK).contains(&dims.len()),
            "index space must have between 1 and {} axes", MAX_RANK);

        Self { dims: dims.to_vec() }
    }


    /**
     * Return the number of axes.
     */
    pub fn rank(&self) -> usize {
        self.dims.len()
    }


    /**
     * Return the number of indexes on each axis.
     */
    pub fn dim(&self) -> &[usize] {
        &self.dims
    }


    /**
     * Return the number of elements in this index space.
     */
    pub fn len(&self) -> usize {
        self.dims.iter().product()
    }


    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }


    /**
     * Determine whether this index space contains the given index.
     */
    pub fn contains(&self, index: &[usize]) -> bool {
        index.len() == self.rank() && index.iter().zip(&self.dims).all(|(i, n)| i < n)
    }


    /**
     * Return the linear offset for the given index, in a row-major memory
     * buffer (C-like; the final index increases fastest).
     */
    pub fn row_major_offset(&self, index: &[usize]) -> usize {
        index
            .iter()
            .zip(&self.dims)
            .fold(0, |offset, (i, n)| offset * n + i)
    }


    /**
     * Invert `row_major_offset`: recover the multi-index of the element at
     * the given linear offset.
     */
    pub fn unravel(&self, offset: usize) -> [usize; MAX_RANK] {
        let mut index = [0; MAX_RANK];
        let mut remainder = offset;

        for (axis, n) in self.dims.iter().enumerate().rev() {
            index[axis] = remainder % n;
            remainder /= n;
        }
        index
    }


    /**
     * Return an iterator which traverses the index space in row-major order.
     */
    pub fn iter(&self) -> impl Iterator<Item = [usize; MAX_RANK]> + '_ {
        (0..self.len()).map(move |n| self.unravel(n))
    }
}




/**
 * Less imposing factory function to construct a 2D IndexSpace object.
 */
pub fn range2d(ni: usize, nj: usize) -> IndexSpace {
    IndexSpace::new(&[ni, nj])
}
