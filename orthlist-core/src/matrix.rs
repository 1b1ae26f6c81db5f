//! Cross-linked sparse matrix storage
//!
//! [`OrthogonalMatrix`] keeps one header per row and one per column. Each
//! stored cell is a single node linked into its row chain (ascending column)
//! and its column chain (ascending row). A cell without a node holds the
//! implicit value `0`; a node may still hold an explicit `0`.

use alloc::vec::Vec;

use crate::error::{MatrixError, Result};
use crate::node::{Axis, Header, Node, NodeId};
use crate::validation::{checked_index, validate_dimensions};

/// Public view of one stored cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub row: usize,
    pub col: usize,
    pub value: i32,
}

/// Sparse `i32` matrix over an arena of cross-linked nodes
///
/// Dimensions are fixed at construction. Writes outside the matrix are
/// ignored; reads outside it fail with [`MatrixError::OutOfRange`].
#[derive(Debug, Clone)]
pub struct OrthogonalMatrix {
    rows: usize,
    cols: usize,
    row_heads: Vec<Header>,
    col_heads: Vec<Header>,
    nodes: Vec<Node>,
}

impl OrthogonalMatrix {
    /// Create an empty `rows x cols` matrix
    ///
    /// Fails with [`MatrixError::InvalidDimension`] if either count is not
    /// positive, and with [`MatrixError::CapacityExceeded`] if the headers
    /// cannot be allocated.
    pub fn new(rows: i32, cols: i32) -> Result<Self> {
        let exceeded = MatrixError::CapacityExceeded { rows, cols };
        let (rows, cols) = validate_dimensions(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            row_heads: empty_headers(rows).ok_or(exceeded)?,
            col_heads: empty_headers(cols).ok_or(exceeded)?,
            nodes: Vec::new(),
        })
    }

    /// Build a matrix from `(row, col, value)` triples through [`set_value`](Self::set_value)
    pub fn from_entries<I>(rows: i32, cols: i32, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, i32, i32)>,
    {
        let mut matrix = Self::new(rows, cols)?;
        for (row, col, value) in entries {
            matrix.set_value(row, col, value);
        }
        Ok(matrix)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Matrix dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Dimensions as the signed coordinates accepted by `get_value`/`set_value`.
    /// Lossless because construction only accepts positive `i32` counts.
    pub(crate) fn extent(&self) -> (i32, i32) {
        (self.rows as i32, self.cols as i32)
    }

    /// Number of explicitly stored cells, including stored zeros
    pub fn nnz(&self) -> usize {
        self.nodes.len()
    }

    pub fn row_heads(&self) -> &[Header] {
        &self.row_heads
    }

    pub fn col_heads(&self) -> &[Header] {
        &self.col_heads
    }

    /// Store `value` at `(row, col)`
    ///
    /// Out-of-range coordinates are a silent no-op. An existing node is
    /// updated in place; otherwise a new node is spliced into both chains.
    pub fn set_value(&mut self, row: i32, col: i32, value: i32) {
        let Some((row, col)) = self.locate(row, col) else {
            return;
        };

        // The same walk finds both an existing node and the insertion point.
        let (left, right) = self.seek(self.row_heads[row].first, Axis::Row, col);
        if let Some(id) = right {
            let node = &mut self.nodes[id.index()];
            if node.col == col {
                node.value = value;
                return;
            }
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node::new(row, col, value));

        let (up, down) = self.seek(self.col_heads[col].first, Axis::Col, row);
        self.splice(id, Axis::Col, col, up, down);
        self.splice(id, Axis::Row, row, left, right);
    }

    /// Value at `(row, col)`; cells without a node read as `0`
    pub fn get_value(&self, row: i32, col: i32) -> Result<i32> {
        let (r, c) = self
            .locate(row, col)
            .ok_or(MatrixError::OutOfRange { row, col })?;

        let (_, cursor) = self.seek(self.row_heads[r].first, Axis::Row, c);
        Ok(cursor
            .map(|id| &self.nodes[id.index()])
            .filter(|node| node.col == c)
            .map_or(0, |node| node.value))
    }

    /// Whether `(row, col)` holds a node (as opposed to the implicit zero)
    pub fn is_stored(&self, row: usize, col: usize) -> bool {
        if row >= self.rows || col >= self.cols {
            return false;
        }
        self.row_entries(row).any(|entry| entry.col == col)
    }

    /// Stored cells of `row` in ascending column order
    ///
    /// Yields nothing for a row outside the matrix.
    pub fn row_entries(&self, row: usize) -> ChainIter<'_> {
        let cursor = self.row_heads.get(row).and_then(|head| head.first);
        ChainIter::new(&self.nodes, cursor, Axis::Row)
    }

    /// Stored cells of `col` in ascending row order
    pub fn col_entries(&self, col: usize) -> ChainIter<'_> {
        let cursor = self.col_heads.get(col).and_then(|head| head.first);
        ChainIter::new(&self.nodes, cursor, Axis::Col)
    }

    /// All stored cells in row-major order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        (0..self.rows).flat_map(move |row| self.row_entries(row))
    }

    pub fn row_len(&self, row: usize) -> usize {
        self.row_entries(row).count()
    }

    pub fn col_len(&self, col: usize) -> usize {
        self.col_entries(col).count()
    }

    fn locate(&self, row: i32, col: i32) -> Option<(usize, usize)> {
        Some((checked_index(row, self.rows)?, checked_index(col, self.cols)?))
    }

    /// Walk a chain from `head` and stop at the first node whose key is not
    /// below `key`. Returns `(predecessor, stop)`; either may be `None`.
    fn seek(
        &self,
        head: Option<NodeId>,
        axis: Axis,
        key: usize,
    ) -> (Option<NodeId>, Option<NodeId>) {
        let mut prev = None;
        let mut cursor = head;
        while let Some(id) = cursor {
            let node = &self.nodes[id.index()];
            if node.key(axis) >= key {
                break;
            }
            prev = cursor;
            cursor = node.next(axis);
        }
        (prev, cursor)
    }

    /// Link `id` between `prev` and `next` in chain `line` of `axis`
    fn splice(
        &mut self,
        id: NodeId,
        axis: Axis,
        line: usize,
        prev: Option<NodeId>,
        next: Option<NodeId>,
    ) {
        let node = &mut self.nodes[id.index()];
        *node.prev_mut(axis) = prev;
        *node.next_mut(axis) = next;

        match prev {
            Some(prev) => *self.nodes[prev.index()].next_mut(axis) = Some(id),
            None => {
                let heads = match axis {
                    Axis::Row => &mut self.row_heads,
                    Axis::Col => &mut self.col_heads,
                };
                heads[line].first = Some(id);
            }
        }
        if let Some(next) = next {
            *self.nodes[next.index()].prev_mut(axis) = Some(id);
        }
    }

    #[cfg(test)]
    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

/// Logical equality: same shape and same value in every cell, where a
/// missing node and a stored zero compare equal.
impl PartialEq for OrthogonalMatrix {
    fn eq(&self, other: &Self) -> bool {
        if self.dimensions() != other.dimensions() {
            return false;
        }
        (0..self.rows).all(|row| {
            let mut lhs = self.row_entries(row).filter(|e| e.value != 0);
            let mut rhs = other.row_entries(row).filter(|e| e.value != 0);
            loop {
                match (lhs.next(), rhs.next()) {
                    (None, None) => break true,
                    (Some(a), Some(b)) if a.col == b.col && a.value == b.value => {}
                    _ => break false,
                }
            }
        })
    }
}

impl Eq for OrthogonalMatrix {}

/// Iterator over one row or column chain
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    nodes: &'a [Node],
    cursor: Option<NodeId>,
    axis: Axis,
}

impl<'a> ChainIter<'a> {
    fn new(nodes: &'a [Node], cursor: Option<NodeId>, axis: Axis) -> Self {
        Self {
            nodes,
            cursor,
            axis,
        }
    }
}

impl Iterator for ChainIter<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Self::Item> {
        let node = &self.nodes[self.cursor?.index()];
        self.cursor = node.next(self.axis);
        Some(Entry {
            row: node.row,
            col: node.col,
            value: node.value,
        })
    }
}

impl core::iter::FusedIterator for ChainIter<'_> {}

/// `count` empty headers, or `None` if the allocator refuses them
fn empty_headers(count: usize) -> Option<Vec<Header>> {
    let mut heads = Vec::new();
    heads.try_reserve_exact(count).ok()?;
    heads.resize(count, Header::default());
    Some(heads)
}
