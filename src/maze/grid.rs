use super::cell::Cell;

/// Row-major cell storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[Cell]>,
    width: u16,
    height: u16,
}

impl Grid {
    pub fn new(width: u16, height: u16, cell: Cell) -> Self {
        let data = vec![cell; width as usize * height as usize].into_boxed_slice();
        Grid {
            data,
            width,
            height,
        }
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn contains(&self, coord: (u16, u16)) -> bool {
        coord.0 < self.width && coord.1 < self.height
    }

    fn ravel_index(&self, x: u16, y: u16) -> usize {
        // Overflow-safe since width and height are u16 (assuming usize is at least 32 bits)
        y as usize * self.width as usize + x as usize
    }

    pub fn set(&mut self, coord: (u16, u16), cell: Cell) {
        let idx = self.ravel_index(coord.0, coord.1);
        self.data[idx] = cell;
    }

    /// Iterates all coordinates holding `cell`, row by row.
    pub fn positions_of(&self, cell: Cell) -> impl Iterator<Item = (u16, u16)> + '_ {
        (0..self.height)
            .flat_map(move |y| (0..self.width).map(move |x| (x, y)))
            .filter(move |&c| self[c] == cell)
    }
}

impl std::ops::Index<(u16, u16)> for Grid {
    type Output = Cell;

    fn index(&self, index: (u16, u16)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_indexing() {
        let mut grid = Grid::new(4, 3, Cell::Wall);
        grid.set((3, 2), Cell::Open);
        assert_eq!(grid[(3, 2)], Cell::Open);
        assert_eq!(grid[(2, 2)], Cell::Wall);
        assert_eq!(grid.positions_of(Cell::Open).collect::<Vec<_>>(), vec![(3, 2)]);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(4, 3, Cell::Wall);
        assert!(grid.contains((3, 2)));
        assert!(!grid.contains((4, 0)));
        assert!(!grid.contains((0, 3)));
    }
}
