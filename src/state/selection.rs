//! Selection and hover state for both widgets.
//!
//! The two widgets have disjoint selection vocabularies: the lineage view
//! selects a time-ordinal row, the slice view selects individual nodes with
//! distinct child and ancestor slots. Both reset whenever a new snapshot is
//! loaded into their widget.

/// Hover and selection state for the lineage view.
///
/// Responsibilities:
/// - Tracking the hovered time-ordinal row
/// - Tracking the selected time-ordinal row
#[derive(Debug, Clone, Default)]
pub struct LineageSelection {
    /// Row under the pointer, if the pointer is over the canvas
    hovered_row: Option<i64>,
    /// Row picked by the last click
    selected_row: Option<i64>,
}

impl LineageSelection {
    /// Creates a new selection state with nothing hovered or selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all hover and selection state.
    pub fn clear(&mut self) {
        self.hovered_row = None;
        self.selected_row = None;
    }

    /// Returns the hovered row, if any.
    pub fn hovered_row(&self) -> Option<i64> {
        self.hovered_row
    }

    /// Returns the selected row, if any.
    pub fn selected_row(&self) -> Option<i64> {
        self.selected_row
    }

    /// Sets or clears the hovered row.
    pub fn set_hovered_row(&mut self, row: Option<i64>) {
        self.hovered_row = row;
    }

    /// Selects a row.
    pub fn select_row(&mut self, row: i64) {
        self.selected_row = Some(row);
    }
}

/// Hover and selection state for the time-slice view.
///
/// Child and ancestor selections are independent slots; selecting one never
/// disturbs the other.
#[derive(Debug, Clone, Default)]
pub struct SliceSelection {
    /// Id of the node under the pointer
    hovered_node: Option<String>,
    /// Id of the selected child node
    selected_child: Option<String>,
    /// Id of the selected ancestor node
    selected_ancestor: Option<String>,
}

impl SliceSelection {
    /// Creates a new selection state with nothing hovered or selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all hover and selection state.
    pub fn clear(&mut self) {
        self.hovered_node = None;
        self.selected_child = None;
        self.selected_ancestor = None;
    }

    /// Returns the hovered node id, if any.
    pub fn hovered_node(&self) -> Option<&str> {
        self.hovered_node.as_deref()
    }

    /// Returns the selected child node id, if any.
    pub fn selected_child(&self) -> Option<&str> {
        self.selected_child.as_deref()
    }

    /// Returns the selected ancestor node id, if any.
    pub fn selected_ancestor(&self) -> Option<&str> {
        self.selected_ancestor.as_deref()
    }

    /// Sets or clears the hovered node.
    pub fn set_hovered_node(&mut self, id: Option<String>) {
        self.hovered_node = id;
    }

    /// Selects a node into the child slot.
    pub fn select_child(&mut self, id: String) {
        self.selected_child = Some(id);
    }

    /// Selects a node into the ancestor slot.
    pub fn select_ancestor(&mut self, id: String) {
        self.selected_ancestor = Some(id);
    }
}
