use crate::maze::{Coord, MazeError, MazeGrid};

/// Hand-authored 62x48 layout. `1` is a wall, `0` is open.
const PATTERN: [&str; 48] = [
    "11111111111011111111111111111111111111111111111111111111111111",
    "10000000010000000000000001011001000000000001001000000000000101",
    "10010011111111110011111001011011111111001001001001001111111101",
    "10010000000000000010001000000001011001001000000001000000000001",
    "11110010011111111110011110001011001011111111001001001111111111",
    "10000010000010000000000001011000000000000001001001000000000101",
    "10111111110010010010011111111011111111001001001111001111100101",
    "10010000010010010010000000001000001000001001001000001000000001",
    "10010010011110011110011111111011111011111111001111111111111101",
    "10010010010010010000001000001011001011000001000001001000000001",
    "11110011110010010011111111011111001011001111001001001111111101",
    "10000000010000010010000001011001000000001000001000000000100001",
    "11110011110010011110011111001011111011111111111001111111101111",
    "10000000000010000000000000000000000001000001000000000000100001",
    "10111111111111110011111011111111111011111001111001111111111101",
    "10010000000010000000001011000000001000000001000000001000000001",
    "10010011111110011111111001011011111011111001001111111111111101",
    "10000000000010000000001011001000001011001001000000000000000101",
    "11110011111111110010011111111001011111001001111001111111111111",
    "10000010000000000010000001011001011000000000000001000000000101",
    "10111110011111110010001011001011011111001001111001111000101101",
    "10010010000000010010001000001011000001001001001000000000101101",
    "11110011110011111111111111111001011111001111001111001111111101",
    "10000010010000010000001011000001000000000000000001000000000101",
    "11110010011111111110001011111111111111001001111111001111100101",
    "10000000000000000000000000000001000000001001001000000000100001",
    "10111111111110011111111011111111001011111001001001111111101111",
    "10011111111110011111110011111111001011111001001001111111001111",
    "10000010000010010000000000001000001011000000001001001000000001",
    "11110011110010010011111011111111111011111001111001001001111101",
    "10010000010010010010000000000001000000001001001000001000000101",
    "10111110010011111110001011111001011111111001001001111111111101",
    "10000010000000010000001000001000001011000001000001000000101101",
    "10111110011111111111111111111111001011111111111001001111100101",
    "10010010000000010000000000000001000000001000000000001000000001",
    "10010010011110011111111011111001011011111111111001111111100101",
    "10000000000010010000001000001000001000001000001000001000101101",
    "11111110011111110011111111011111111001001111001111111000101111",
    "10000010000010010000000001000000001011001000000000000000101101",
    "10010010010010010011111111111001011111111111111001111001111101",
    "10010000010000000010000000000001000000001001001000001000000001",
    "11111111111111110011111011111011111111111001001001001111111101",
    "10010000000000010010000001000001000000001000000001000000101101",
    "10010011111111110010001011111111001011001001001111111111100101",
    "10010010010000010010001011000001011001001001000001000000101101",
    "10010010010011111111111001011011111011111001001001001000101101",
    "10000000000000000000000000001000000000000001001001001000000001",
    "11111111111110111111111111111111111111111111111111111111111111",
];

/// Entrance in the top border.
const START: Coord = (11, 0);
/// Exit column in the bottom border.
const END_X: u16 = 13;

/// Loads the fixed layout. Always yields the same grid and endpoints.
pub fn fixed_layout() -> Result<MazeGrid, MazeError> {
    let end = (END_X, PATTERN.len() as u16 - 1);
    MazeGrid::from_pattern(&PATTERN, START, end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout_shape() {
        let maze = fixed_layout().unwrap();
        assert_eq!((maze.width(), maze.height()), (62, 48));
        assert_eq!(maze.start(), (11, 0));
        assert_eq!(maze.end(), (13, 47));
    }

    #[test]
    fn test_fixed_layout_is_stable() {
        assert_eq!(fixed_layout().unwrap(), fixed_layout().unwrap());
    }
}
