use rand::Rng;

use crate::maze::{Cell, Coord, Grid};

/// Get carve candidates of a cell.
/// A candidate is a cell two steps away in the cardinal directions, strictly inside the border,
/// that has not been carved yet.
fn carve_candidates(coord: Coord, grid: &Grid) -> impl Iterator<Item = Coord> + '_ {
    let (x, y) = coord;
    [
        // NOTE: When x < 2 or y < 2, set x - 2 or y - 2 to u16::MAX, and when x + 2 or y + 2
        // exceeds u16::MAX, clamp it to u16::MAX. Both get filtered out by the border check.
        (x, y.saturating_add(2)),
        (x.saturating_add(2), y),
        (x, y.checked_sub(2).unwrap_or(u16::MAX)),
        (x.checked_sub(2).unwrap_or(u16::MAX), y),
    ]
    .into_iter()
    .filter(move |&(nx, ny)| {
        nx > 0
            && ny > 0
            && nx < grid.width() - 1
            && ny < grid.height() - 1
            && grid[(nx, ny)] == Cell::Wall
    })
}

/// Carves corridors into a solid grid with a randomized depth-first walk over cells two apart,
/// knocking out the wall between each cell and the neighbor it moves to.
///
/// Expects `width >= 3` and `height >= 3` so that an interior cell exists.
pub fn randomized_dfs<R: Rng>(width: u16, height: u16, rng: &mut R) -> Grid {
    let mut grid = Grid::new(width, height, Cell::Wall);

    // Initialize the starting point anywhere off the border
    let start: Coord = (
        rng.random_range(1..width - 1),
        rng.random_range(1..height - 1),
    );
    grid.set(start, Cell::Open);

    // The stack keeps only carved cells
    let mut stack = vec![start];

    while let Some(cell) = stack.pop() {
        let neighbors = carve_candidates(cell, &grid).collect::<Vec<_>>();

        if !neighbors.is_empty() {
            let neighbor = neighbors[rng.random_range(0..neighbors.len())];
            let wall = ((cell.0 + neighbor.0) / 2, (cell.1 + neighbor.1) / 2);
            grid.set(wall, Cell::Open);
            grid.set(neighbor, Cell::Open);
            // Put the cell back first so we can look at another neighbor of this cell later
            stack.push(cell);
            // Put the neighbor to carve the maze in that neighbor's direction
            stack.push(neighbor);
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::get_rng;

    #[test]
    fn test_border_stays_solid() {
        let mut rng = get_rng(Some(7));
        let grid = randomized_dfs(21, 15, &mut rng);
        for x in 0..grid.width() {
            assert_eq!(grid[(x, 0)], Cell::Wall);
            assert_eq!(grid[(x, grid.height() - 1)], Cell::Wall);
        }
        for y in 0..grid.height() {
            assert_eq!(grid[(0, y)], Cell::Wall);
            assert_eq!(grid[(grid.width() - 1, y)], Cell::Wall);
        }
    }

    #[test]
    fn test_carves_more_than_the_origin() {
        let mut rng = get_rng(Some(3));
        let grid = randomized_dfs(11, 11, &mut rng);
        assert!(grid.positions_of(Cell::Open).count() > 1);
    }

    #[test]
    fn test_same_seed_same_grid() {
        let a = randomized_dfs(25, 17, &mut get_rng(Some(42)));
        let b = randomized_dfs(25, 17, &mut get_rng(Some(42)));
        assert_eq!(a, b);
    }
}
