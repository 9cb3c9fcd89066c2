use rayon::prelude::*;
use crate::index_space::{IndexSpace, MAX_RANK};




/**
 * A grid is a dense, row-major array of shape `(d_1, ..., d_k, Nq)`: every
 * cell of a 1D, 2D, or 3D index space holds `num_fields` contiguous values.
 * Cells are addressed by their spatial multi-index; the trailing axis holds
 * the field values of the cell.
 */
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    index_space: IndexSpace,
    num_fields: usize,
    data: Vec<f64>,
}




// ============================================================================
impl Grid {


    /**
     * Allocate a zero-filled grid covering the given spatial shape.
     */
    pub fn zeros(shape: &[usize], num_fields: usize) -> Self {
        let index_space = IndexSpace::new(shape);
        let data = vec![0.0; index_space.len() * num_fields];
        Self {
            index_space,
            num_fields,
            data,
        }
    }


    /**
     * Generate a grid with values defined from a closure. The closure
     * receives the spatial multi-index of each cell and the mutable slice of
     * its field values, which is zero on entry. Cells are visited in
     * parallel.
     */
    pub fn from_slice_function<F>(shape: &[usize], num_fields: usize, f: F) -> Self
    where
        F: Fn([usize; MAX_RANK], &mut [f64]) + Sync,
    {
        let mut grid = Self::zeros(shape, num_fields);

        if grid.num_fields > 0 {
            let space = &grid.index_space;
            grid.data
                .par_chunks_exact_mut(num_fields)
                .enumerate()
                .for_each(|(n, slice)| f(space.unravel(n), slice));
        }
        grid
    }


    /**
     * Return the full array shape, including the trailing field axis.
     */
    pub fn shape(&self) -> Vec<usize> {
        let mut shape = self.index_space.dim().to_vec();
        shape.push(self.num_fields);
        shape
    }


    pub fn index_space(&self) -> &IndexSpace {
        &self.index_space
    }


    pub fn num_fields(&self) -> usize {
        self.num_fields
    }


    /**
     * Return the number of cells (not values) in the grid.
     */
    pub fn num_cells(&self) -> usize {
        self.index_space.len()
    }


    pub fn data(&self) -> &[f64] {
        &self.data
    }


    pub fn into_data(self) -> Vec<f64> {
        self.data
    }


    /**
     * Return the field values at the given spatial index.
     */
    pub fn get_slice(&self, index: &[usize]) -> &[f64] {
        let n = self.offset(index);
        &self.data[n .. n + self.num_fields]
    }


    pub fn get_slice_mut(&mut self, index: &[usize]) -> &mut [f64] {
        let n = self.offset(index);
        let r = self.num_fields;
        &mut self.data[n .. n + r]
    }


    /**
     * Iterate over the field values of every cell, in row-major order.
     */
    pub fn iter_data(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.num_fields.max(1))
    }


    fn offset(&self, index: &[usize]) -> usize {
        if !self.index_space.contains(index) {
            panic!("index {:?} out of range on grid of shape {:?}",
                index,
                self.index_space.dim());
        }
        self.index_space.row_major_offset(index) * self.num_fields
    }
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::Grid;

    #[test]
    fn shape_includes_the_field_axis() {
        assert_eq!(Grid::zeros(&[4, 3], 8).shape(), vec![4, 3, 8]);
        assert_eq!(Grid::zeros(&[4, 3, 2], 5).data().len(), 120);
    }

    #[test]
    fn grid_sampling_works() {
        let grid = Grid::from_slice_function(&[4, 6], 2, |[i, j, _], f| {
            f[0] = i as f64;
            f[1] = j as f64;
        });
        assert_eq!(grid.get_slice(&[2, 5]), &[2.0, 5.0]);
        assert_eq!(grid.get_slice(&[3, 0]), &[3.0, 0.0]);
        assert_eq!(grid.iter_data().count(), 24);
    }

    #[test]
    fn zero_fields_produce_an_empty_last_axis() {
        let grid = Grid::from_slice_function(&[3, 3], 0, |_, _| unreachable!());
        assert_eq!(grid.shape(), vec![3, 3, 0]);
        assert!(grid.data().is_empty());
    }

    #[test]
    fn slices_can_be_written() {
        let mut grid = Grid::zeros(&[5], 3);
        grid.get_slice_mut(&[4]).copy_from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(grid.data()[12..], [1.0, 2.0, 3.0]);
    }

    #[test]
    #[should_panic]
    fn out_of_range_index_panics() {
        Grid::zeros(&[2, 2], 1).get_slice(&[2, 0]);
    }
}
