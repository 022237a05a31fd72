use crate::{error::EngineError, terminal::winning_move, COLS, ROWS};

/// One of the two sides of a game
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    PlayerOne,
    PlayerTwo,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::PlayerOne => Player::PlayerTwo,
            Player::PlayerTwo => Player::PlayerOne,
        }
    }

    /// The player number shown to humans
    pub fn number(self) -> usize {
        match self {
            Player::PlayerOne => 1,
            Player::PlayerTwo => 2,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    PlayerOne,
    PlayerTwo,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::PlayerOne => Cell::PlayerOne,
            Player::PlayerTwo => Cell::PlayerTwo,
        }
    }
}

/// A `ROWS` x `COLS` Connect 4 board
///
/// Row 0 is the bottom of the board and column 0 the leftmost column. Pieces
/// only ever land on the lowest empty cell of a column, so a cell above an
/// empty cell is always empty as well.
///
/// A `Grid` carries no turn information, the player placing a piece is always
/// given explicitly.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    cells: [Cell; ROWS * COLS], // cells are stored left-to-right, bottom-to-top
}

impl Grid {
    /// Creates an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    /// Builds a board from a string of one-indexed column digits, players
    /// alternating from `PlayerOne`
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, EngineError> {
        let mut grid = Self::new();
        let mut player = Player::PlayerOne;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=COLS) => {
                    let column = column - 1;
                    // abort if the position is already won
                    if winning_move(&grid, Player::PlayerOne)
                        || winning_move(&grid, Player::PlayerTwo)
                    {
                        return Err(EngineError::GameOver);
                    }
                    let row = grid
                        .next_open_row(column)
                        .ok_or(EngineError::ColumnFull { column })?;
                    grid.drop_piece(row, column, player)?;
                    player = player.opponent();
                }
                _ => return Err(EngineError::InvalidMove(column_char)),
            }
        }
        Ok(grid)
    }

    /// Builds a board from a text picture, top row first
    ///
    /// Each of the `ROWS` non-blank lines holds `COLS` cells: `.` for an empty
    /// cell, `X` for `PlayerOne` and `O` for `PlayerTwo`.
    ///
    /// ```
    /// use connect4_minimax::{Cell, Grid};
    ///
    ///# use std::error::Error;
    ///# fn main() -> Result<(), Box<dyn Error>> {
    /// let grid = Grid::from_layout(
    ///     "
    ///     .......
    ///     .......
    ///     .......
    ///     .......
    ///     ...O...
    ///     ..XXO..
    ///     ",
    /// )?;
    /// assert_eq!(grid.cell(1, 3), Cell::PlayerTwo);
    ///# Ok(())
    ///# }
    /// ```
    pub fn from_layout(layout: &str) -> Result<Self, EngineError> {
        let lines: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != ROWS {
            return Err(EngineError::InvalidLayout(format!(
                "found {} rows",
                lines.len()
            )));
        }

        let mut grid = Self::new();
        for (line_number, line) in lines.iter().enumerate() {
            let row = ROWS - 1 - line_number;
            if line.chars().count() != COLS {
                return Err(EngineError::InvalidLayout(format!(
                    "row {} has {} cells",
                    row,
                    line.chars().count()
                )));
            }
            for (column, symbol) in line.chars().enumerate() {
                grid.cells[Self::index(row, column)] = match symbol {
                    '.' => Cell::Empty,
                    'X' => Cell::PlayerOne,
                    'O' => Cell::PlayerTwo,
                    other => {
                        return Err(EngineError::InvalidLayout(format!(
                            "unknown cell '{}'",
                            other
                        )))
                    }
                };
            }
        }

        for column in 0..COLS {
            for row in 1..ROWS {
                if !grid.cell(row, column).is_empty() && grid.cell(row - 1, column).is_empty() {
                    return Err(EngineError::InvalidLayout(format!(
                        "floating piece at row {}, column {}",
                        row, column
                    )));
                }
            }
        }
        Ok(grid)
    }

    pub(crate) const fn index(row: usize, column: usize) -> usize {
        column + COLS * row
    }

    pub fn cell(&self, row: usize, column: usize) -> Cell {
        self.cells[Self::index(row, column)]
    }

    pub(crate) fn cell_at(&self, index: usize) -> Cell {
        self.cells[index]
    }

    /// Whether a piece can be dropped into `column`
    pub fn is_valid_location(&self, column: usize) -> bool {
        column < COLS && self.cell(ROWS - 1, column).is_empty()
    }

    /// The lowest empty row of `column`, or `None` if the column is full
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        if column >= COLS {
            return None;
        }
        (0..ROWS).find(|&row| self.cell(row, column).is_empty())
    }

    /// Places a piece for `player` at `(row, column)` in place
    ///
    /// The target must be the next open row of a valid column, anything else
    /// is rejected and leaves the board untouched.
    pub fn drop_piece(
        &mut self,
        row: usize,
        column: usize,
        player: Player,
    ) -> Result<(), EngineError> {
        if column >= COLS {
            return Err(EngineError::ColumnOutOfRange { column });
        }
        let open_row = self
            .next_open_row(column)
            .ok_or(EngineError::ColumnFull { column })?;
        if row != open_row {
            return Err(EngineError::NotNextOpenRow { row, column });
        }
        self.cells[Self::index(row, column)] = player.into();
        Ok(())
    }

    /// Returns a copy of the board with a piece for `player` dropped into
    /// `column`, leaving `self` untouched
    pub fn child(&self, column: usize, player: Player) -> Option<Self> {
        let row = self.next_open_row(column)?;
        let mut child = self.clone();
        child.cells[Self::index(row, column)] = player.into();
        Some(child)
    }

    /// All playable columns in ascending order
    pub fn valid_locations(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&column| self.is_valid_location(column))
            .collect()
    }

    /// The number of pieces `player` has on the board
    pub fn count(&self, player: Player) -> usize {
        let cell = Cell::from(player);
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn num_moves(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
