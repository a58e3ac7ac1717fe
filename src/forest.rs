//! Lineage forest construction and layout.
//!
//! A forest collects cell observations across discretized time: each node
//! belongs to one timestamp ordinal and optionally links to a parent in an
//! earlier timestamp. The forest groups nodes into tracks (the same cell
//! followed over consecutive steps) and lineages (all tracks descending from
//! one ancestor), lays tracks out into integer offset columns, and exports
//! the result in the snapshot format the viewer widgets consume.

use crate::snapshot::GraphSnapshot;
use anyhow::{bail, Result};
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct ForestNode {
    id: String,
    ordinal: i64,
    label: Option<i64>,
    color: Option<String>,
    parent: Option<usize>,
    children: Vec<usize>,
    offset: Option<f64>,
}

/// A collection of lineages over discretized time.
#[derive(Debug, Clone, Default)]
pub struct Forest {
    nodes: Vec<ForestNode>,
    index: HashMap<String, usize>,
}

impl Forest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Adds a node observed at the given timestamp ordinal.
    ///
    /// Duplicate ids are rejected; a node is observed once per forest.
    pub fn add_node(&mut self, id: &str, ordinal: i64, label: Option<i64>) -> Result<()> {
        if self.index.contains_key(id) {
            bail!("duplicate node added: {}", id);
        }
        self.index.insert(id.to_string(), self.nodes.len());
        self.nodes.push(ForestNode {
            id: id.to_string(),
            ordinal,
            label,
            color: None,
            parent: None,
            children: Vec::new(),
            offset: None,
        });
        Ok(())
    }

    /// Links a child node to its parent in an earlier timestamp.
    ///
    /// The child's ordinal must be strictly greater than the parent's.
    pub fn set_parent(&mut self, child_id: &str, parent_id: &str) -> Result<()> {
        let child = self.idx(child_id)?;
        let parent = self.idx(parent_id)?;
        if self.nodes[child].ordinal <= self.nodes[parent].ordinal {
            bail!(
                "bad parent link: {} (ordinal {}) must be later than {} (ordinal {})",
                child_id,
                self.nodes[child].ordinal,
                parent_id,
                self.nodes[parent].ordinal
            );
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        Ok(())
    }

    /// Sets a node's display color (hex string).
    pub fn set_color(&mut self, id: &str, color: &str) -> Result<()> {
        let i = self.idx(id)?;
        self.nodes[i].color = Some(color.to_string());
        Ok(())
    }

    fn idx(&self, id: &str) -> Result<usize> {
        match self.index.get(id) {
            Some(&i) => Ok(i),
            None => bail!("unknown node: {}", id),
        }
    }

    /// The root of the node's track: the earliest observation reachable by
    /// walking up through parents that have exactly one child. A division
    /// (multi-child parent) starts new tracks for each child.
    pub fn track_ancestor(&self, id: &str) -> Result<&str> {
        let idx = self.track_root(self.idx(id)?);
        Ok(&self.nodes[idx].id)
    }

    /// The root of the node's lineage: its ultimate parentless ancestor.
    pub fn lineage_ancestor(&self, id: &str) -> Result<&str> {
        let idx = self.lineage_root(self.idx(id)?);
        Ok(&self.nodes[idx].id)
    }

    fn track_root(&self, idx: usize) -> usize {
        match self.nodes[idx].parent {
            None => idx,
            Some(p) if self.nodes[p].children.len() > 1 => idx,
            Some(p) => self.track_root(p),
        }
    }

    fn lineage_root(&self, mut idx: usize) -> usize {
        while let Some(p) = self.nodes[idx].parent {
            idx = p;
        }
        idx
    }

    fn children_sorted(&self, idx: usize) -> Vec<usize> {
        let mut children = self.nodes[idx].children.clone();
        children.sort_by(|&a, &b| self.nodes[a].id.cmp(&self.nodes[b].id));
        children
    }

    /// Assigns layout offsets: each leaf takes the next integer column, a
    /// single-child node stays in its child's column, and a dividing node
    /// centers on the midpoint of its first and last child. Lineages lay out
    /// in sorted root-id order, one column apart.
    pub fn assign_offsets(&mut self) {
        let mut roots: Vec<usize> = (0..self.nodes.len())
            .filter(|&i| self.nodes[i].parent.is_none())
            .collect();
        roots.sort_by(|&a, &b| self.nodes[a].id.cmp(&self.nodes[b].id));

        let mut cursor = 0.0;
        for (i, &root) in roots.iter().enumerate() {
            if i > 0 {
                cursor += 1.0;
            }
            self.assign_node_offsets(root, &mut cursor);
        }
    }

    fn assign_node_offsets(&mut self, idx: usize, cursor: &mut f64) {
        let children = self.children_sorted(idx);
        match children.len() {
            0 => self.nodes[idx].offset = Some(*cursor),
            1 => {
                self.assign_node_offsets(children[0], cursor);
                self.nodes[idx].offset = self.nodes[children[0]].offset;
            }
            _ => {
                self.assign_node_offsets(children[0], cursor);
                for &child in &children[1..] {
                    *cursor += 1.0;
                    self.assign_node_offsets(child, cursor);
                }
                let first = self.nodes[children[0]].offset.unwrap_or(0.0);
                let last = self.nodes[children[children.len() - 1]].offset.unwrap_or(0.0);
                self.nodes[idx].offset = Some(0.5 * (first + last));
            }
        }
    }

    /// The assigned layout offset of a node, if `assign_offsets` has run.
    pub fn offset_of(&self, id: &str) -> Result<Option<f64>> {
        Ok(self.nodes[self.idx(id)?].offset)
    }

    /// Overall (width, height) bounds: one past the largest assigned offset
    /// and the largest timestamp ordinal.
    pub fn dimensions(&self) -> (f64, f64) {
        if self.nodes.is_empty() {
            return (0.0, 0.0);
        }
        let width = self
            .nodes
            .iter()
            .filter_map(|n| n.offset)
            .fold(0.0_f64, f64::max)
            + 1.0;
        let height = self.nodes.iter().map(|n| n.ordinal).max().unwrap_or(0) as f64 + 1.0;
        (width, height)
    }

    /// Exports the forest as a snapshot JSON value in the widget input shape.
    pub fn to_snapshot_value(&self) -> serde_json::Value {
        let (width, height) = self.dimensions();
        let mut id_to_node = serde_json::Map::new();
        for node in &self.nodes {
            let parent_id = node.parent.map(|p| self.nodes[p].id.clone());
            let isolated = node.parent.is_none() && node.children.is_empty();
            id_to_node.insert(
                node.id.clone(),
                serde_json::json!({
                    "identity": node.id,
                    "timestamp_ordinal": node.ordinal,
                    "label": node.label,
                    "color": node.color,
                    "offset": node.offset.unwrap_or(0.0),
                    "parent_id": parent_id,
                    "isolated": isolated,
                }),
            );
        }
        serde_json::json!({
            "width": width,
            "height": height,
            "id_to_node": id_to_node,
        })
    }

    /// Exports the forest as a parsed [`GraphSnapshot`].
    pub fn to_snapshot(&self) -> Result<GraphSnapshot> {
        GraphSnapshot::from_json_value(self.to_snapshot_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One lineage: a-b-c is a single track, c divides into d and e.
    fn dividing_forest() -> Forest {
        let mut f = Forest::new();
        f.add_node("a", 0, Some(1)).unwrap();
        f.add_node("b", 1, Some(1)).unwrap();
        f.add_node("c", 2, Some(1)).unwrap();
        f.add_node("d", 3, Some(2)).unwrap();
        f.add_node("e", 3, Some(3)).unwrap();
        f.set_parent("b", "a").unwrap();
        f.set_parent("c", "b").unwrap();
        f.set_parent("d", "c").unwrap();
        f.set_parent("e", "c").unwrap();
        f
    }

    #[test]
    fn duplicate_node_is_rejected() {
        let mut f = Forest::new();
        assert!(f.is_empty());
        f.add_node("a", 0, None).unwrap();
        assert!(f.add_node("a", 1, None).is_err());
        assert_eq!(f.len(), 1);
    }

    #[test]
    fn parent_must_be_strictly_earlier() {
        let mut f = Forest::new();
        f.add_node("a", 2, None).unwrap();
        f.add_node("b", 2, None).unwrap();
        f.add_node("c", 1, None).unwrap();
        assert!(f.set_parent("b", "a").is_err());
        assert!(f.set_parent("c", "a").is_err());
        assert!(f.set_parent("a", "c").is_ok());
    }

    #[test]
    fn track_breaks_at_divisions() {
        let f = dividing_forest();
        assert_eq!(f.track_ancestor("c").unwrap(), "a");
        // d and e start fresh tracks below the division at c.
        assert_eq!(f.track_ancestor("d").unwrap(), "d");
        assert_eq!(f.track_ancestor("e").unwrap(), "e");
        assert_eq!(f.lineage_ancestor("e").unwrap(), "a");
    }

    #[test]
    fn single_track_collapses_onto_one_column() {
        let mut f = Forest::new();
        f.add_node("a", 0, None).unwrap();
        f.add_node("b", 1, None).unwrap();
        f.set_parent("b", "a").unwrap();
        f.assign_offsets();
        assert_eq!(f.offset_of("a").unwrap(), Some(0.0));
        assert_eq!(f.offset_of("b").unwrap(), Some(0.0));
        assert_eq!(f.dimensions(), (1.0, 2.0));
    }

    #[test]
    fn division_centers_parent_between_children() {
        let mut f = dividing_forest();
        f.assign_offsets();
        assert_eq!(f.offset_of("d").unwrap(), Some(0.0));
        assert_eq!(f.offset_of("e").unwrap(), Some(1.0));
        assert_eq!(f.offset_of("c").unwrap(), Some(0.5));
        // The track above the division follows its only child's column.
        assert_eq!(f.offset_of("b").unwrap(), Some(0.5));
        assert_eq!(f.offset_of("a").unwrap(), Some(0.5));
        assert_eq!(f.dimensions(), (2.0, 4.0));
    }

    #[test]
    fn lineages_lay_out_a_column_apart() {
        let mut f = Forest::new();
        f.add_node("m", 0, None).unwrap();
        f.add_node("n", 0, None).unwrap();
        f.assign_offsets();
        assert_eq!(f.offset_of("m").unwrap(), Some(0.0));
        assert_eq!(f.offset_of("n").unwrap(), Some(1.0));
    }

    #[test]
    fn snapshot_export_carries_parent_links() {
        let mut f = dividing_forest();
        f.assign_offsets();
        f.set_color("a", "#50fa7b").unwrap();
        let snap = f.to_snapshot().unwrap();
        assert_eq!(snap.len(), 5);
        assert_eq!(snap.width(), 2.0);
        assert_eq!(snap.height(), 4.0);
        let d = snap.get("d").unwrap();
        assert_eq!(d.parent_id.as_deref(), Some("c"));
        assert_eq!(snap.get("a").unwrap().color.as_deref(), Some("#50fa7b"));
        assert_eq!(snap.edges().count(), 4);
    }
}
