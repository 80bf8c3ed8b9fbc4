//! Cell addressing
//!
//! Cells are addressed internally by a 0-based `(row, col)` pair. Shells that
//! expose cells as named elements use the 1-based identifier form
//! `{prefix}_r{row}c{col}`; the [`AddressBook`] keeps that mapping as a lookup
//! table so recovering an address from an identifier never re-parses it.

use std::collections::HashMap;
use std::fmt;

use crate::messages::Direction;

/// Position of a cell in the grid (0-based)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellAddress {
    pub row: usize,
    pub col: usize,
}

impl CellAddress {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Encode as the external identifier `{prefix}_r{row+1}c{col+1}`
    pub fn encode(&self, prefix: &str) -> String {
        format!("{}_r{}c{}", prefix, self.row + 1, self.col + 1)
    }

    /// Decode an external identifier produced by [`CellAddress::encode`]
    ///
    /// Returns `None` for anything that is not exactly `{prefix}_r<n>c<m>` with
    /// positive `n` and `m`.
    pub fn decode(prefix: &str, id: &str) -> Option<Self> {
        let rest = id.strip_prefix(prefix)?.strip_prefix("_r")?;
        let (row, col) = rest.split_once('c')?;
        Some(Self::new(parse_one_based(row)?, parse_one_based(col)?))
    }

    /// Neighbouring address in `direction`, or `None` at the grid edge
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Self> {
        let (row, col) = match direction {
            Direction::Up => (self.row.checked_sub(1)?, self.col),
            Direction::Down => (self.row + 1, self.col),
            Direction::Left => (self.row, self.col.checked_sub(1)?),
            Direction::Right => (self.row, self.col + 1),
        };
        (row < rows && col < cols).then_some(Self::new(row, col))
    }

    /// Check if the address lies inside a `rows` x `cols` grid
    pub fn is_within(&self, rows: usize, cols: usize) -> bool {
        self.row < rows && self.col < cols
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Canonical 1-based index: digits only, no leading zero
fn parse_one_based(digits: &str) -> Option<usize> {
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<usize>().ok()?.checked_sub(1)
}

/// Identifier <-> address lookup table for one grid
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    prefix: String,
    by_id: HashMap<String, CellAddress>,
}

impl AddressBook {
    pub fn new(prefix: &str, rows: usize, cols: usize) -> Self {
        let mut book = Self {
            prefix: prefix.to_string(),
            by_id: HashMap::new(),
        };
        book.rebuild(rows, cols);
        book
    }

    /// Recreate the table for new grid dimensions
    pub fn rebuild(&mut self, rows: usize, cols: usize) {
        self.by_id.clear();
        self.by_id.reserve(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let addr = CellAddress::new(row, col);
                self.by_id.insert(addr.encode(&self.prefix), addr);
            }
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Address registered for an identifier
    pub fn lookup(&self, id: &str) -> Option<CellAddress> {
        self.by_id.get(id).copied()
    }

    /// Identifier for an address (whether or not it is currently registered)
    pub fn id_of(&self, addr: CellAddress) -> String {
        addr.encode(&self.prefix)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_is_one_based() {
        assert_eq!(CellAddress::new(0, 0).encode("grid"), "grid_r1c1");
        assert_eq!(CellAddress::new(9, 2).encode("grid"), "grid_r10c3");
    }

    #[test]
    fn test_decode_inverts_encode() {
        for row in 0..12 {
            for col in 0..12 {
                let addr = CellAddress::new(row, col);
                assert_eq!(CellAddress::decode("tbl", &addr.encode("tbl")), Some(addr));
            }
        }
    }

    #[test]
    fn test_decode_rejects_foreign_ids() {
        assert_eq!(CellAddress::decode("tbl", "other_r1c1"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_r0c1"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_r1c"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_r1c2x"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_rxc2"), None);
        assert_eq!(CellAddress::decode("tbl", ""), None);
    }

    #[test]
    fn test_decode_rejects_leading_zeros() {
        assert_eq!(CellAddress::decode("tbl", "tbl_r01c1"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_r1c01"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_r00c1"), None);
        assert_eq!(CellAddress::decode("tbl", "tbl_r10c1"), Some(CellAddress::new(9, 0)));
    }

    #[test]
    fn test_decode_prefix_containing_c() {
        let addr = CellAddress::new(3, 4);
        assert_eq!(CellAddress::decode("calc", &addr.encode("calc")), Some(addr));
    }

    #[test]
    fn test_step_stops_at_edges() {
        let corner = CellAddress::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        assert_eq!(
            corner.step(Direction::Down, 3, 3),
            Some(CellAddress::new(1, 0))
        );

        let far = CellAddress::new(2, 2);
        assert_eq!(far.step(Direction::Down, 3, 3), None);
        assert_eq!(far.step(Direction::Right, 3, 3), None);
    }

    #[test]
    fn test_address_book_lookup() {
        let book = AddressBook::new("t", 2, 3);
        assert_eq!(book.len(), 6);
        assert_eq!(book.lookup("t_r2c3"), Some(CellAddress::new(1, 2)));
        assert_eq!(book.lookup("t_r3c1"), None);
        assert_eq!(book.id_of(CellAddress::new(0, 1)), "t_r1c2");
    }

    #[test]
    fn test_address_book_rebuild_shrinks() {
        let mut book = AddressBook::new("t", 3, 3);
        book.rebuild(1, 1);
        assert_eq!(book.len(), 1);
        assert_eq!(book.lookup("t_r2c2"), None);
    }
}
