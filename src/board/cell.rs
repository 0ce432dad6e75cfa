use std::fmt;

const COL_OFFSET: u8 = 9;
const BLOCK_OFFSET: u8 = 18;

/// One of the 81 cells of the grid, counted in row-major order.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cell(u8);

/// One of the 27 houses: rows 0..9, then columns 9..18, then blocks 18..27.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct House(u8);

/// A cell's slot within a house, `0..9` in ascending cell order.
#[derive(Copy, Clone, Eq, PartialEq, PartialOrd, Ord, Debug, Hash)]
pub struct Position(u8);

impl Cell {
    /// Constructs a new `Cell` from an index in `0..81`.
    pub fn new(cell: u8) -> Self {
        debug_assert!(cell < 81);
        Cell(cell)
    }

    /// Constructs a new `Cell`. Returns `None`, if the index is not in `0..81`.
    pub fn new_checked(cell: u8) -> Option<Self> {
        if cell < 81 {
            Some(Cell(cell))
        } else {
            None
        }
    }

    /// Returns the cell index as `u8`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the cell index as `usize`.
    #[inline(always)]
    pub fn as_index(self) -> usize {
        self.0 as _
    }

    /// Returns an iterator over all cells in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..81).map(Cell::new)
    }

    /// Returns the index of the row containing this cell.
    #[inline(always)]
    pub fn row(self) -> u8 {
        self.0 / 9
    }

    /// Returns the index of the column containing this cell.
    #[inline(always)]
    pub fn col(self) -> u8 {
        self.0 % 9
    }

    /// Returns the index of the 3x3 block containing this cell.
    #[inline(always)]
    pub fn block(self) -> u8 {
        self.row() / 3 * 3 + self.col() / 3
    }

    /// Returns the row, column and block houses of this cell.
    pub fn houses(self) -> [House; 3] {
        [
            House::row(self.row()),
            House::col(self.col()),
            House::block(self.block()),
        ]
    }

    /// Returns the 20 cells sharing a house with this cell: the other cells
    /// of its row, then of its column, then the block cells in neither.
    #[inline(always)]
    pub fn peers(self) -> &'static [Cell; 20] {
        &PEERS_OF_CELL[self.as_index()]
    }
}

impl House {
    /// Constructs a new `House` from an index in `0..27`.
    pub fn new(house: u8) -> Self {
        debug_assert!(house < 27);
        House(house)
    }

    /// Returns the row house of index `row` in `0..9`.
    pub fn row(row: u8) -> Self {
        debug_assert!(row < 9);
        House(row)
    }

    /// Returns the column house of index `col` in `0..9`.
    pub fn col(col: u8) -> Self {
        debug_assert!(col < 9);
        House(col + COL_OFFSET)
    }

    /// Returns the block house of index `block` in `0..9`.
    pub fn block(block: u8) -> Self {
        debug_assert!(block < 9);
        House(block + BLOCK_OFFSET)
    }

    /// Returns the house index as `usize`.
    #[inline(always)]
    pub fn as_index(self) -> usize {
        self.0 as _
    }

    /// Returns an iterator over all houses: rows, then columns, then blocks.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..27).map(House::new)
    }

    /// Returns an iterator over the row houses.
    pub fn rows() -> impl Iterator<Item = Self> {
        (0..9).map(House::row)
    }

    /// Returns an iterator over the column houses.
    pub fn cols() -> impl Iterator<Item = Self> {
        (0..9).map(House::col)
    }

    /// Returns an iterator over the block houses.
    pub fn blocks() -> impl Iterator<Item = Self> {
        (0..9).map(House::block)
    }

    /// Returns the 9 member cells in ascending cell order.
    #[inline(always)]
    pub fn cells(self) -> &'static [Cell; 9] {
        &CELLS_BY_HOUSE[self.as_index()]
    }

    /// Returns the member cell at the given position.
    #[inline(always)]
    pub fn cell_at(self, pos: Position) -> Cell {
        self.cells()[pos.as_index()]
    }
}

impl Position {
    /// Constructs a new `Position` from an index in `0..9`.
    pub fn new(pos: u8) -> Self {
        debug_assert!(pos < 9);
        Position(pos)
    }

    /// Returns the position as `u8`.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns the position as `usize`.
    #[inline(always)]
    pub fn as_index(self) -> usize {
        self.0 as _
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "r{}c{}", self.row() + 1, self.col() + 1)
    }
}

impl fmt::Display for House {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            0..=8 => write!(f, "row {}", self.0 + 1),
            9..=17 => write!(f, "col {}", self.0 - COL_OFFSET + 1),
            _ => write!(f, "block {}", self.0 - BLOCK_OFFSET + 1),
        }
    }
}

static CELLS_BY_HOUSE: [[Cell; 9]; 27] = cells_by_house();
static PEERS_OF_CELL: [[Cell; 20]; 81] = peers_of_cell();

const fn cells_by_house() -> [[Cell; 9]; 27] {
    let mut table = [[Cell(0); 9]; 27];
    let mut house = 0;
    while house < 9 {
        let mut pos = 0;
        while pos < 9 {
            table[house][pos] = Cell((house * 9 + pos) as u8);
            table[house + 9][pos] = Cell((pos * 9 + house) as u8);
            let row = house / 3 * 3 + pos / 3;
            let col = house % 3 * 3 + pos % 3;
            table[house + 18][pos] = Cell((row * 9 + col) as u8);
            pos += 1;
        }
        house += 1;
    }
    table
}

const fn peers_of_cell() -> [[Cell; 20]; 81] {
    let mut table = [[Cell(0); 20]; 81];
    let mut cell = 0;
    while cell < 81 {
        let row = cell / 9;
        let col = cell % 9;
        let mut n = 0;
        let mut k = 0;
        while k < 9 {
            if k != col {
                table[cell][n] = Cell((row * 9 + k) as u8);
                n += 1;
            }
            k += 1;
        }
        k = 0;
        while k < 9 {
            if k != row {
                table[cell][n] = Cell((k * 9 + col) as u8);
                n += 1;
            }
            k += 1;
        }
        let mut r = row / 3 * 3;
        while r < row / 3 * 3 + 3 {
            let mut c = col / 3 * 3;
            while c < col / 3 * 3 + 3 {
                if r != row && c != col {
                    table[cell][n] = Cell((r * 9 + c) as u8);
                    n += 1;
                }
                c += 1;
            }
            r += 1;
        }
        cell += 1;
    }
    table
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_cell_has_20_distinct_peers() {
        for cell in Cell::all() {
            let peers = cell.peers();
            assert_eq!(peers.len(), 20);
            for (n, peer) in peers.iter().enumerate() {
                assert_ne!(*peer, cell);
                assert!(!peers[..n].contains(peer));
                let shares_house = peer.row() == cell.row()
                    || peer.col() == cell.col()
                    || peer.block() == cell.block();
                assert!(shares_house);
            }
        }
    }

    #[test]
    fn peer_order_is_row_col_then_block() {
        let peers: Vec<u8> = Cell::new(0).peers().iter().map(|c| c.get()).collect();
        assert_eq!(
            peers,
            [1, 2, 3, 4, 5, 6, 7, 8, 9, 18, 27, 36, 45, 54, 63, 72, 10, 11, 19, 20]
        );
    }

    #[test]
    fn house_cells() {
        let cells = |house: House| -> Vec<u8> { house.cells().iter().map(|c| c.get()).collect() };
        assert_eq!(cells(House::row(0)), [0, 1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(cells(House::col(1)), [1, 10, 19, 28, 37, 46, 55, 64, 73]);
        assert_eq!(cells(House::block(4)), [30, 31, 32, 39, 40, 41, 48, 49, 50]);
    }

    #[test]
    fn houses_of_cell() {
        let cell = Cell::new(40);
        assert_eq!(
            cell.houses(),
            [House::row(4), House::col(4), House::block(4)]
        );
    }
}
