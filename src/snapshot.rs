//! Graph snapshot data model and queries.
//!
//! A snapshot is the widget input format: a JSON object with overall
//! `width`/`height` bounds and an `id_to_node` mapping from node id to node
//! record. Snapshots are immutable once parsed; the viewer replaces the whole
//! snapshot on each load rather than updating it incrementally.
//!
//! Two producers feed this format with different position key spellings:
//! lineage exports use `offset`/`timestamp_ordinal` while time-slice exports
//! use `x`/`y`. Both deserialize into the same [`Node`] via serde aliases.

use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Error raised by snapshot queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// A nearest-lookup was attempted against a snapshot with no nodes.
    Empty,
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Empty => write!(f, "no nodes loaded"),
        }
    }
}

impl std::error::Error for SnapshotError {}

/// A single lineage entity with a position and an optional parent link.
///
/// One struct serves both views: the lineage view reads `x` as the spatial
/// offset and `y` as the time ordinal, the slice view reads `x`/`y` as the
/// spatial position within the slice.
#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    /// Node id, taken from the `id_to_node` map key.
    #[serde(skip)]
    pub id: String,
    /// Spatial offset (lineage view) or slice x position.
    #[serde(alias = "offset")]
    pub x: f64,
    /// Time ordinal (lineage view) or slice y position.
    #[serde(alias = "timestamp_ordinal")]
    pub y: f64,
    /// Display color as a hex string, e.g. "#50fa7b". Defaults to the theme
    /// node color when absent.
    #[serde(default)]
    pub color: Option<String>,
    /// Id of the parent node, if any. A parent id that does not resolve in
    /// the snapshot is skipped silently; not every node has a parent.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Segmentation label carried through from the producer.
    #[serde(default)]
    pub label: Option<i64>,
    /// At a time slice, true when this node is a child of the slice's
    /// reference generation (as opposed to an ancestor).
    #[serde(default)]
    pub is_child: bool,
    /// True when the node has neither parent nor children.
    #[serde(default)]
    pub isolated: bool,
}

/// Raw wire shape of a snapshot, before node ids are folded in.
#[derive(Deserialize)]
struct RawSnapshot {
    width: f64,
    height: f64,
    id_to_node: serde_json::Map<String, serde_json::Value>,
}

/// An immutable set of nodes with overall bounds.
///
/// Nodes keep the insertion order of the source JSON object (`serde_json` is
/// built with `preserve_order`); nearest-lookup tie-breaking depends on it.
#[derive(Debug, Clone, Default)]
pub struct GraphSnapshot {
    width: f64,
    height: f64,
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl GraphSnapshot {
    /// Parses a snapshot from a JSON string.
    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_json_value(value)
    }

    /// Parses a snapshot from an already-decoded JSON value.
    ///
    /// Bounds are validated here so queries can rely on them: negative
    /// `width`/`height` are rejected at the load boundary.
    pub fn from_json_value(value: serde_json::Value) -> anyhow::Result<Self> {
        let raw: RawSnapshot = serde_json::from_value(value)?;
        if raw.width < 0.0 || raw.height < 0.0 {
            anyhow::bail!(
                "bad snapshot bounds: width {}, height {}",
                raw.width,
                raw.height
            );
        }
        let mut nodes = Vec::with_capacity(raw.id_to_node.len());
        let mut index = HashMap::with_capacity(raw.id_to_node.len());
        for (id, record) in raw.id_to_node {
            let mut node: Node = serde_json::from_value(record)
                .map_err(|e| anyhow::anyhow!("bad node record '{}': {}", id, e))?;
            node.id = id.clone();
            index.insert(id, nodes.len());
            nodes.push(node);
        }
        Ok(Self {
            width: raw.width,
            height: raw.height,
            nodes,
            index,
        })
    }

    /// Overall width bound of the snapshot in model units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Overall height bound of the snapshot in model units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Nodes in source insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Looks up a node by id.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    /// Resolves a node's parent, if it has one and the parent is present.
    pub fn parent_of(&self, node: &Node) -> Option<&Node> {
        node.parent_id.as_deref().and_then(|pid| self.get(pid))
    }

    /// Iterates (child, parent) pairs for every node with a resolvable
    /// parent. Nodes without a parent id, and parent ids absent from the
    /// snapshot, contribute no edge.
    pub fn edges(&self) -> impl Iterator<Item = (&Node, &Node)> {
        self.nodes
            .iter()
            .filter_map(move |n| self.parent_of(n).map(|p| (n, p)))
    }

    /// Finds the node whose cell center is nearest to the queried model
    /// point, by squared Euclidean distance. Each node occupies a unit cell,
    /// so its center sits at (x + 0.5, y + 0.5). Ties resolve to the
    /// first-encountered node in insertion order.
    pub fn nearest_node(&self, x: f64, y: f64) -> Result<&Node, SnapshotError> {
        let mut best: Option<(&Node, f64)> = None;
        for node in &self.nodes {
            let dx = x - 0.5 - node.x;
            let dy = y - 0.5 - node.y;
            let distance = dx * dx + dy * dy;
            match best {
                Some((_, min)) if min <= distance => {}
                _ => best = Some((node, distance)),
            }
        }
        best.map(|(n, _)| n).ok_or(SnapshotError::Empty)
    }

    /// Finds the time-ordinal row nearest to the queried model y, clamped to
    /// the snapshot's `[0, height]` range on both ends.
    pub fn nearest_row(&self, y: f64) -> Result<i64, SnapshotError> {
        if self.nodes.is_empty() {
            return Err(SnapshotError::Empty);
        }
        let row = y.floor() as i64;
        let top = (self.height as i64).max(0);
        Ok(row.clamp(0, top))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_node_snapshot() -> GraphSnapshot {
        GraphSnapshot::from_json_value(serde_json::json!({
            "width": 2,
            "height": 2,
            "id_to_node": {
                "1": {"x": 0, "y": 0},
                "2": {"x": 1, "y": 0, "parent_id": "1"},
                "3": {"x": 0, "y": 1},
            }
        }))
        .unwrap()
    }

    #[test]
    fn parses_lineage_key_spelling() {
        let snap = GraphSnapshot::from_json_value(serde_json::json!({
            "width": 3,
            "height": 4,
            "id_to_node": {
                "a": {"offset": 1.5, "timestamp_ordinal": 2, "color": "#50fa7b"},
            }
        }))
        .unwrap();
        let a = snap.get("a").unwrap();
        assert_eq!(a.x, 1.5);
        assert_eq!(a.y, 2.0);
        assert_eq!(a.color.as_deref(), Some("#50fa7b"));
        assert!(a.parent_id.is_none());
    }

    #[test]
    fn nearest_node_measures_to_cell_centers() {
        let snap = three_node_snapshot();
        // (0.9, 0.1) is closest to the center of node 1's cell at (0.5, 0.5).
        assert_eq!(snap.nearest_node(0.9, 0.1).unwrap().id, "1");
        assert_eq!(snap.nearest_node(1.6, 0.4).unwrap().id, "2");
        assert_eq!(snap.nearest_node(0.5, 1.9).unwrap().id, "3");
    }

    #[test]
    fn nearest_node_ties_break_by_insertion_order() {
        let snap = GraphSnapshot::from_json_value(serde_json::json!({
            "width": 2,
            "height": 1,
            "id_to_node": {
                "b": {"x": 0, "y": 0},
                "a": {"x": 1, "y": 0},
            }
        }))
        .unwrap();
        // Equidistant between both cell centers; "b" was inserted first.
        assert_eq!(snap.nearest_node(1.0, 0.5).unwrap().id, "b");
    }

    #[test]
    fn nearest_node_on_empty_snapshot_is_an_error() {
        let snap = GraphSnapshot::from_json_value(serde_json::json!({
            "width": 0, "height": 0, "id_to_node": {}
        }))
        .unwrap();
        assert_eq!(snap.nearest_node(0.0, 0.0).unwrap_err(), SnapshotError::Empty);
        assert_eq!(snap.nearest_row(0.0).unwrap_err(), SnapshotError::Empty);
    }

    #[test]
    fn negative_bounds_are_rejected_at_load() {
        for bounds in [(-1.0, 2.0), (2.0, -3.0)] {
            let result = GraphSnapshot::from_json_value(serde_json::json!({
                "width": bounds.0,
                "height": bounds.1,
                "id_to_node": {
                    "a": {"x": 0, "y": 0},
                }
            }));
            assert!(result.is_err());
        }
    }

    #[test]
    fn nearest_row_clamps_both_bounds() {
        let snap = three_node_snapshot();
        assert_eq!(snap.nearest_row(-3.0).unwrap(), 0);
        assert_eq!(snap.nearest_row(0.4).unwrap(), 0);
        assert_eq!(snap.nearest_row(1.7).unwrap(), 1);
        assert_eq!(snap.nearest_row(99.0).unwrap(), 2);
    }

    #[test]
    fn edges_skip_missing_parents() {
        let snap = GraphSnapshot::from_json_value(serde_json::json!({
            "width": 3,
            "height": 2,
            "id_to_node": {
                "a": {"x": 0, "y": 0},
                "b": {"x": 1, "y": 1, "parent_id": "a"},
                "c": {"x": 2, "y": 1, "parent_id": "gone"},
            }
        }))
        .unwrap();
        let edges: Vec<(&str, &str)> = snap
            .edges()
            .map(|(child, parent)| (child.id.as_str(), parent.id.as_str()))
            .collect();
        assert_eq!(edges, vec![("b", "a")]);
    }
}
