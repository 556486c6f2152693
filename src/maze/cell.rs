use crossterm::style::{Color, Stylize};

use std::fmt;

/// A cell of the maze grid: either traversable or blocked.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Open,
    #[default]
    Wall,
}

impl Cell {
    pub fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }

    /// Parses a pattern glyph. `#` and `1` are walls, `.` and `0` are open.
    pub fn from_glyph(glyph: char) -> Option<Cell> {
        match glyph {
            '#' | '1' => Some(Cell::Wall),
            '.' | '0' => Some(Cell::Open),
            _ => None,
        }
    }
}

/// What a position looks like when a maze is drawn to the terminal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tile {
    Wall,
    Open,
    /// Visited by the drawn walk.
    Trail,
    Start,
    End,
}

impl Tile {
    /// The width of each tile when rendered, in character widths.
    pub const WIDTH: u16 = 2;
}

impl From<Cell> for Tile {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Open => Tile::Open,
            Cell::Wall => Tile::Wall,
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let styled_symbol = match self {
            Tile::Wall => "⬜".with(Color::White),
            Tile::Open => "  ".with(Color::Reset),
            Tile::Trail => "* ".with(Color::Yellow),
            Tile::Start => "🟩".with(Color::Green),
            Tile::End => "🟥".with(Color::Red),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                styled_symbol.content().width(),
                Tile::WIDTH as usize,
                "Each tile must occupy exactly two character widths."
            );
        }

        write!(f, "{}", styled_symbol)
    }
}
