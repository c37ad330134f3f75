//! Nodes of the mixing tree.
//!
//! Nodes live in an arena (a slice of [`ColorNode`]s owned by a
//! [`Palette`][crate::Palette]) and refer to their parents through
//! [`NodeId`]s, indices into that arena.

use std::fmt;
use crate::{error::Result, mixer::{Mixer, Pigment}, to_hex, ColorValue};

/// Stable identifier of a node: its position in the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the palette's canonical order.
    pub fn index(self) -> usize { self.0 }
}

/// How a color was obtained.
#[derive(Clone, Debug, PartialEq)]
pub enum Origin {
    /// A paint supplied by the user, with its name.
    Source(String),
    /// A mix of two nodes with their proportions.  The proportions
    /// are `t` and `1 - t` for some `t` ∈ \[0, 1\].
    Mixed([(NodeId, f64); 2]),
}

/// A color together with the way to obtain it.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorNode {
    value: ColorValue,
    origin: Origin,
}

impl ColorNode {
    /// Create a source color (a paint) named `name`.
    pub fn source(name: impl Into<String>, value: ColorValue) -> Self {
        ColorNode { value, origin: Origin::Source(name.into()) }
    }

    /// Mix `t` parts of `p0` with `1 - t` parts of `p1` using the
    /// [`Pigment`] model.  The new node is not added to any palette.
    /// `p0` and `p1` must belong to the same arena.
    pub fn derive(p0: NodeRef<'_>, p1: NodeRef<'_>, t: f64) -> Result<Self> {
        Self::derive_with(&Pigment, p0, p1, t)
    }

    /// Same as [`ColorNode::derive`] with a custom `mixer`.
    pub fn derive_with<M>(mixer: &M, p0: NodeRef<'_>, p1: NodeRef<'_>,
                          t: f64) -> Result<Self>
    where M: Mixer + ?Sized {
        let value = mixer.mix(p0.value(), p1.value(), t)?;
        Ok(ColorNode { value,
                       origin: Origin::Mixed([(p0.id, t), (p1.id, 1. - t)]) })
    }

    /// The RGB value of the node.
    #[inline]
    pub fn value(&self) -> ColorValue { self.value }

    /// How the node was obtained.
    #[inline]
    pub fn origin(&self) -> &Origin { &self.origin }

    /// The name of a source color, `None` for mixes.
    pub fn name(&self) -> Option<&str> {
        match &self.origin {
            Origin::Source(name) => Some(name),
            Origin::Mixed(_) => None,
        }
    }

    /// The parents of the node with their proportions: empty for a
    /// source color, two entries for a mix.
    pub fn parents(&self) -> &[(NodeId, f64)] {
        match &self.origin {
            Origin::Source(_) => &[],
            Origin::Mixed(p) => p,
        }
    }

    /// Says whether the node is a source color.
    pub fn is_source(&self) -> bool { matches!(self.origin, Origin::Source(_)) }

    /// Human readable recipe of the node.  Parents are looked up in
    /// `nodes`, the arena the node was derived from.
    ///
    /// A source color is described by its name; a mix by the
    /// description of its parents with their proportions, e.g.
    /// `"25% Red + 75% Blue"`.  Mixed parents are described in
    /// parentheses.
    pub fn describe(&self, nodes: &[ColorNode]) -> String {
        let mut s = String::new();
        self.write_description(nodes, &mut s, false);
        s
    }

    fn write_description(&self, nodes: &[ColorNode], s: &mut String,
                         nested: bool) {
        match &self.origin {
            Origin::Source(name) => s.push_str(name),
            Origin::Mixed([(p0, t0), (p1, t1)]) => {
                if nested { s.push('(') }
                percent(s, *t0);
                write_parent(nodes, *p0, s);
                s.push_str(" + ");
                percent(s, *t1);
                write_parent(nodes, *p1, s);
                if nested { s.push(')') }
            }
        }
    }
}

fn write_parent(nodes: &[ColorNode], id: NodeId, s: &mut String) {
    match nodes.get(id.0) {
        Some(p) => p.write_description(nodes, s, true),
        None => s.push('?'),
    }
}

/// Append `t` as a percentage with at most one decimal.
fn percent(s: &mut String, t: f64) {
    let p = (1000. * t).round() / 10.;
    s.push_str(&format!("{p}% "));
}


/// A node borrowed from its arena, so that its parents can be
/// followed.
#[derive(Clone, Copy, Debug)]
pub struct NodeRef<'a> {
    nodes: &'a [ColorNode],
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    /// `id` must be a valid index of `nodes`.
    pub(crate) fn new(nodes: &'a [ColorNode], id: NodeId) -> Self {
        debug_assert!(id.0 < nodes.len());
        NodeRef { nodes, id }
    }

    /// The identifier of the node in its palette.
    #[inline]
    pub fn id(&self) -> NodeId { self.id }

    /// The node itself.
    #[inline]
    pub fn node(&self) -> &'a ColorNode { &self.nodes[self.id.0] }

    /// The RGB value of the node.
    #[inline]
    pub fn value(&self) -> ColorValue { self.node().value }

    /// The name of a source color, `None` for mixes.
    pub fn name(&self) -> Option<&'a str> { self.node().name() }

    /// Says whether the node is a source color.
    pub fn is_source(&self) -> bool { self.node().is_source() }

    /// Iterate on the parents of the node together with their
    /// proportions.
    pub fn parents(&self) -> impl Iterator<Item = (NodeRef<'a>, f64)> + 'a {
        let nodes = self.nodes;
        self.node().parents().iter()
            .map(move |&(id, t)| (NodeRef::new(nodes, id), t))
    }

    /// See [`ColorNode::describe`].
    pub fn describe(&self) -> String { self.node().describe(self.nodes) }

    /// The source colors that make up the node with their total
    /// proportions, following parents down to the source colors.
    pub fn recipe(&self) -> Recipe<'a> {
        let mut parts = Vec::new();
        self.collect_sources(1., &mut parts);
        Recipe { parts }
    }

    fn collect_sources(&self, weight: f64, parts: &mut Vec<(&'a str, f64)>) {
        match self.node().origin() {
            Origin::Source(name) => {
                match parts.iter_mut().find(|(n, _)| *n == name.as_str()) {
                    Some((_, w)) => *w += weight,
                    None => parts.push((name.as_str(), weight)),
                }
            }
            Origin::Mixed(_) => {
                for (p, t) in self.parents() {
                    p.collect_sources(weight * t, parts);
                }
            }
        }
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}: {}", to_hex(self.value())),
            None => write!(f, "Mixed color {}, recipe: {}",
                           to_hex(self.value()), self.describe()),
        }
    }
}


/// Proportions of source colors making up a color.
///
/// Created by [`NodeRef::recipe`].
#[derive(Clone, Debug, PartialEq)]
pub struct Recipe<'a> {
    parts: Vec<(&'a str, f64)>,
}

impl<'a> Recipe<'a> {
    /// The names of the source colors with their proportions, in the
    /// order they are first met.  Proportions sum to `1.`, up to
    /// rounding errors.
    pub fn parts(&self) -> &[(&'a str, f64)] { &self.parts }

    /// The proportion of the source color `name` (`0.` if absent).
    pub fn proportion(&self, name: &str) -> f64 {
        self.parts.iter().filter(|(n, _)| *n == name).map(|(_, t)| t).sum()
    }
}

impl fmt::Display for Recipe<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = String::new();
        for (i, &(name, t)) in self.parts.iter().enumerate() {
            if i > 0 { s.push_str(" + ") }
            percent(&mut s, t);
            s.push_str(name);
        }
        f.write_str(&s)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn arena() -> Vec<ColorNode> {
        vec![ColorNode::source("Red", ColorValue::new(255, 0, 0)),
             ColorNode::source("Blue", ColorValue::new(0, 0, 255))]
    }

    #[test]
    fn source_node() {
        let n = ColorNode::source("Mars Black", ColorValue::new(22, 22, 23));
        assert!(n.is_source());
        assert_eq!(n.name(), Some("Mars Black"));
        assert!(n.parents().is_empty());
        assert_eq!(n.describe(&[]), "Mars Black");
    }

    #[test]
    fn derived_node() {
        let nodes = arena();
        let red = NodeRef::new(&nodes, NodeId(0));
        let blue = NodeRef::new(&nodes, NodeId(1));
        let n = ColorNode::derive(red, blue, 0.25).unwrap();
        assert!(!n.is_source());
        assert_eq!(n.name(), None);
        assert_eq!(n.parents(), &[(NodeId(0), 0.25), (NodeId(1), 0.75)]);
        let (t0, t1) = (n.parents()[0].1, n.parents()[1].1);
        assert!((t0 + t1 - 1.).abs() < 1e-12);
        assert_eq!(n.value(), crate::mix(red.value(), blue.value(), 0.25)
                   .unwrap());
        assert_eq!(n.describe(&nodes), "25% Red + 75% Blue");
    }

    #[test]
    fn derive_rejects_bad_proportion() {
        let nodes = arena();
        let red = NodeRef::new(&nodes, NodeId(0));
        let blue = NodeRef::new(&nodes, NodeId(1));
        assert!(ColorNode::derive(red, blue, -0.5).is_err());
    }

    #[test]
    fn nested_description_and_recipe() {
        let mut nodes = arena();
        let purple = ColorNode::derive(NodeRef::new(&nodes, NodeId(0)),
                                       NodeRef::new(&nodes, NodeId(1)),
                                       0.5).unwrap();
        nodes.push(purple);
        let n = ColorNode::derive(NodeRef::new(&nodes, NodeId(2)),
                                  NodeRef::new(&nodes, NodeId(1)),
                                  0.5).unwrap();
        nodes.push(n);
        let n = NodeRef::new(&nodes, NodeId(3));
        assert_eq!(n.describe(), "50% (50% Red + 50% Blue) + 50% Blue");
        let recipe = n.recipe();
        assert_eq!(recipe.parts(), &[("Red", 0.25), ("Blue", 0.75)]);
        assert_eq!(recipe.proportion("Blue"), 0.75);
        assert_eq!(recipe.proportion("White"), 0.);
        assert_eq!(recipe.to_string(), "25% Red + 75% Blue");
        let parents: Vec<_> = n.parents().map(|(p, t)| (p.id(), t)).collect();
        assert_eq!(parents, [(NodeId(2), 0.5), (NodeId(1), 0.5)]);
    }

    #[test]
    fn display() {
        let nodes = arena();
        let red = NodeRef::new(&nodes, NodeId(0));
        assert_eq!(red.to_string(), "Red: #ff0000");
        assert_eq!(red.recipe().to_string(), "100% Red");
    }
}
