//! Arena handles, element nodes and chain headers
//!
//! Nodes never own each other. Every link is a [`NodeId`] into the arena
//! held by [`OrthogonalMatrix`](crate::OrthogonalMatrix), so a node that sits
//! in both a row chain and a column chain is still owned exactly once.

/// Stable handle to a node in a matrix arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the node in the arena
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Which of the two chains a walk follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// Horizontal chain, ordered by column
    Row,
    /// Vertical chain, ordered by row
    Col,
}

/// Anchor of one row or column chain
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Header {
    pub(crate) first: Option<NodeId>,
}

impl Header {
    /// First node of the chain, if the row/column stores anything
    pub const fn first(&self) -> Option<NodeId> {
        self.first
    }

    pub const fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

/// One explicitly stored cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) value: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
    up: Option<NodeId>,
    down: Option<NodeId>,
}

impl Node {
    pub(crate) const fn new(row: usize, col: usize, value: i32) -> Self {
        Self {
            row,
            col,
            value,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }

    /// Sort key of the node within the chain of `axis`
    pub(crate) const fn key(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.col,
            Axis::Col => self.row,
        }
    }

    pub(crate) const fn next(&self, axis: Axis) -> Option<NodeId> {
        match axis {
            Axis::Row => self.right,
            Axis::Col => self.down,
        }
    }

    pub(crate) const fn prev(&self, axis: Axis) -> Option<NodeId> {
        match axis {
            Axis::Row => self.left,
            Axis::Col => self.up,
        }
    }

    pub(crate) fn next_mut(&mut self, axis: Axis) -> &mut Option<NodeId> {
        match axis {
            Axis::Row => &mut self.right,
            Axis::Col => &mut self.down,
        }
    }

    pub(crate) fn prev_mut(&mut self, axis: Axis) -> &mut Option<NodeId> {
        match axis {
            Axis::Row => &mut self.left,
            Axis::Col => &mut self.up,
        }
    }
}
