use crate::bitset::Set;
use crate::board::{Cell, Digit, House};
use crate::errors::{FromBytesError, FromBytesSliceError, GridParseError};
use std::fmt;
use std::str::FromStr;

/// The plain value grid: 81 entries in row-major order, `0` for empty cells.
///
/// A `Grid` records entries only. Deriving and maintaining candidates is the
/// job of [`Board`](crate::Board).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub struct Grid([u8; 81]);

impl Grid {
    /// The grid with every cell empty.
    pub const EMPTY: Grid = Grid([0; 81]);

    /// Creates a sudoku grid from a byte array. `0` marks an empty cell,
    /// `1..=9` are entries.
    pub fn from_bytes(bytes: [u8; 81]) -> Result<Grid, FromBytesError> {
        if bytes.iter().any(|&byte| byte > 9) {
            return Err(FromBytesError(()));
        }
        Ok(Grid(bytes))
    }

    /// Creates a sudoku grid from a byte slice. The slice must have length 81.
    pub fn from_bytes_slice(bytes: &[u8]) -> Result<Grid, FromBytesSliceError> {
        if bytes.len() != 81 {
            return Err(FromBytesSliceError::WrongLength(bytes.len()));
        }
        let mut grid = [0; 81];
        grid.copy_from_slice(bytes);
        Grid::from_bytes(grid).map_err(FromBytesSliceError::FromBytesError)
    }

    /// Returns a byte array of the grid entries, `0` for empty cells.
    pub fn to_bytes(self) -> [u8; 81] {
        self.0
    }

    /// Returns the entry of the given cell, if any.
    #[inline]
    pub fn get(self, cell: Cell) -> Option<Digit> {
        Digit::new_checked(self.0[cell.as_index()])
    }

    /// Returns a copy of this grid with the given entry placed.
    pub(crate) fn with(mut self, cell: Cell, digit: Digit) -> Grid {
        self.0[cell.as_index()] = digit.get();
        self
    }

    /// Returns a copy of this grid with the given cell emptied.
    pub(crate) fn cleared(mut self, cell: Cell) -> Grid {
        self.0[cell.as_index()] = 0;
        self
    }

    /// Returns an iterator over the cell entries in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Option<Digit>> + '_ {
        self.0.iter().map(|&byte| Digit::new_checked(byte))
    }

    /// Counts the filled cells.
    pub fn n_clues(&self) -> usize {
        self.0.iter().filter(|&&byte| byte != 0).count()
    }

    /// Checks that the grid is completely filled and every house contains
    /// all nine digits.
    pub fn is_solved(&self) -> bool {
        House::all().all(|house| {
            let mut seen = Set::<Digit>::NONE;
            for &cell in house.cells() {
                match self.get(cell) {
                    Some(digit) => seen |= digit,
                    None => return false,
                }
            }
            seen.is_full()
        })
    }

    /// Returns the one-line form: 81 characters, `.` for empty cells.
    pub fn to_line_string(&self) -> String {
        self.0
            .iter()
            .map(|&byte| match byte {
                0 => '.',
                _ => (b'0' + byte) as char,
            })
            .collect()
    }
}

/// Parses a grid from text, reading it cell by cell.
///
/// Whitespace is skipped. Every other character is one cell: `1`-`9` parse
/// as entries and any other character as an empty cell, so `.`, `_` and `0`
/// placeholders all work. Exactly 81 cell characters are required.
impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0; 81];
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if count < 81 {
                bytes[count] = match ch.to_digit(10) {
                    Some(digit) => digit as u8,
                    None => 0,
                };
            }
            count += 1;
        }
        if count != 81 {
            return Err(GridParseError(count));
        }
        Ok(Grid(bytes))
    }
}

/// Prints the grid in block layout, `.` for empty cells:
///
/// ```text
///  5 3 .  . 7 .  . . .
///  6 . .  1 9 5  . . .
///  ...
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, &byte) in self.0.iter().enumerate() {
            match byte {
                0 => write!(f, " .")?,
                _ => write!(f, " {}", byte)?,
            }
            if i % 3 == 2 {
                write!(f, " ")?;
            }
            if i % 9 == 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid({})", self.to_line_string())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_line_string())
    }
}
