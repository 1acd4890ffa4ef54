//! The recursive region tree and its by-id index.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A region in the hh.ru area tree.
///
/// Areas form a forest: countries at the roots, regions below them,
/// cities at the leaves. Children are owned and kept in server order;
/// `parent_id` is a back-reference by id, never an ownership edge, so
/// the structure cannot cycle. A node whose wire form omits the `areas`
/// field parses identically to one with an explicit empty array.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::reference::Area;
///
/// let moscow: Area = serde_json::from_str(
///     r#"{"id":"1","name":"Moscow","areas":[]}"#,
/// )?;
/// assert!(moscow.areas.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Area {
    /// Area id, unique across the whole tree.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Id of the enclosing area; `None` at the roots.
    pub parent_id: Option<String>,
    /// Child areas, in server order.
    #[serde(default)]
    pub areas: Vec<Area>,
}

/// A by-id index over a parsed area forest.
///
/// Built in a single pass over the owned tree. The index borrows the
/// forest it was built from, answers constant-time lookups, and derives
/// root paths from tree structure rather than the `parent_id` field, so
/// an inconsistent back-reference in the payload cannot send a walk in
/// circles.
///
/// ## Examples
///
/// ```rust,ignore
/// use headhunter_lib::reference::AreaIndex;
///
/// let areas = client.areas().await?;
/// let index = AreaIndex::build(&areas)?;
/// if let Some(city) = index.get("1") {
///     println!("{} has {} children", city.name, city.areas.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AreaIndex<'a> {
    nodes: HashMap<&'a str, &'a Area>,
    parents: HashMap<&'a str, Option<&'a str>>,
}

impl<'a> AreaIndex<'a> {
    /// Indexes a forest of areas in one walk.
    ///
    /// ## Errors
    ///
    /// Returns [`ParseError::DuplicateAreaId`] if the same id appears
    /// more than once anywhere in the forest.
    pub fn build(roots: &'a [Area]) -> Result<Self, ParseError> {
        let mut nodes: HashMap<&'a str, &'a Area> = HashMap::new();
        let mut parents: HashMap<&'a str, Option<&'a str>> = HashMap::new();
        let mut stack: Vec<(&'a Area, Option<&'a str>)> =
            roots.iter().rev().map(|area| (area, None)).collect();

        while let Some((area, parent)) = stack.pop() {
            if nodes.insert(area.id.as_str(), area).is_some() {
                return Err(ParseError::DuplicateAreaId {
                    id: area.id.clone(),
                });
            }
            parents.insert(area.id.as_str(), parent);
            for child in area.areas.iter().rev() {
                stack.push((child, Some(area.id.as_str())));
            }
        }

        Ok(Self { nodes, parents })
    }

    /// Looks up an area by id.
    pub fn get(&self, id: &str) -> Option<&'a Area> {
        self.nodes.get(id).copied()
    }

    /// Returns `true` if the id exists anywhere in the forest.
    pub fn contains(&self, id: &str) -> bool {
        self.nodes.contains_key(id)
    }

    /// Returns the id chain from a root down to the given area, inclusive.
    ///
    /// `None` when the id is unknown.
    pub fn path(&self, id: &str) -> Option<Vec<&'a str>> {
        let node = self.get(id)?;
        let mut path = Vec::new();
        let mut current = Some(node.id.as_str());
        while let Some(id) = current {
            path.push(id);
            current = self.parents.get(id).copied().flatten();
        }
        path.reverse();
        Some(path)
    }

    /// Number of indexed areas.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the forest was empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
