//! Palettes: source paints together with all their pairwise mixes.

use std::collections::{HashMap, HashSet};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use crate::{error::{Error, Result},
            lab::perceptual_distance,
            mixer::{Mixer, Pigment},
            node::{ColorNode, NodeId, NodeRef},
            ColorValue};

/// Refinement used when none is specified.
pub const DEFAULT_REFINEMENT: usize = 8;

/// All colors reachable by mixing two paints of a set.
///
/// The nodes are stored in their canonical order: the source paints
/// in the order given, then, for each pair `(i, j)` of sources with
/// `i < j` in lexicographic order, the `refinement - 1` mixes with
/// `k / refinement` parts of paint `i`, `k = 1, …, refinement - 1`.
/// A palette is immutable once built.
///
/// # Example
///
/// ```
/// use pigment_palette::{ColorValue, Palette};
/// let palette = Palette::build([("Black", ColorValue::new(0, 0, 0)),
///                               ("White", ColorValue::new(255, 255, 255))],
///                              2)?;
/// assert_eq!(palette.len(), 3);
/// let c = palette.search(ColorValue::new(250, 250, 250))?;
/// assert_eq!(c.name(), Some("White"));
/// # Ok::<(), pigment_palette::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Palette {
    nodes: Vec<ColorNode>, // canonical order
    index: HashMap<ColorValue, NodeId>,
    sources: usize,
    refinement: usize,
}

/// The mixes of the sources `i` and `j`, in increasing proportion of `i`.
fn pair_mixes<M>(mixer: &M, sources: &[ColorNode], (i, j): (usize, usize),
                 refinement: usize) -> Result<Vec<ColorNode>>
where M: Mixer + ?Sized {
    let p0 = NodeRef::new(sources, NodeId(i));
    let p1 = NodeRef::new(sources, NodeId(j));
    (1 .. refinement).map(|k| {
        let t = k as f64 / refinement as f64;
        ColorNode::derive_with(mixer, p0, p1, t)
    }).collect()
}

impl Palette {
    /// Build the palette of `sources` with the [`Pigment`] mixer.
    /// See [`Palette::build_with`].
    pub fn build<I, S>(sources: I, refinement: usize) -> Result<Self>
    where I: IntoIterator<Item = (S, ColorValue)>,
          S: Into<String> {
        Self::build_with(&Pigment, sources, refinement)
    }

    /// Build the palette of `sources` (pairs of names and colors),
    /// generating `refinement - 1` intermediate colors between every
    /// two sources with `mixer`.
    ///
    /// Fails if `refinement < 2`, if `sources` is empty or if a name
    /// appears twice.
    pub fn build_with<M, I, S>(mixer: &M, sources: I, refinement: usize)
                               -> Result<Self>
    where M: Mixer + Sync + ?Sized,
          I: IntoIterator<Item = (S, ColorValue)>,
          S: Into<String> {
        if refinement < 2 {
            return Err(Error::InvalidRefinement(refinement))
        }
        let mut names = HashSet::new();
        let mut nodes = Vec::new();
        for (name, color) in sources {
            let name = name.into();
            if !names.insert(name.clone()) {
                return Err(Error::DuplicateName(name))
            }
            nodes.push(ColorNode::source(name, color));
        }
        if nodes.is_empty() { return Err(Error::NoSources) }
        let n = nodes.len();
        let pairs: Vec<_> = (0 .. n)
            .flat_map(|i| (i + 1 .. n).map(move |j| (i, j)))
            .collect();
        // The mixes of each pair are computed independently but
        // collected in the order of `pairs`.
        #[cfg(feature = "parallel")]
        let mixes: Vec<Vec<ColorNode>> = pairs.par_iter()
            .map(|&p| pair_mixes(mixer, &nodes, p, refinement))
            .collect::<Result<_>>()?;
        #[cfg(not(feature = "parallel"))]
        let mixes: Vec<Vec<ColorNode>> = pairs.iter()
            .map(|&p| pair_mixes(mixer, &nodes, p, refinement))
            .collect::<Result<_>>()?;
        nodes.extend(mixes.into_iter().flatten());

        let mut index = HashMap::with_capacity(nodes.len());
        for (i, node) in nodes.iter().enumerate() {
            index.entry(node.value()).or_insert(NodeId(i));
        }
        log::debug!("palette of {n} sources, refinement {refinement}: \
                     {} colors ({} distinct)", nodes.len(), index.len());
        Ok(Palette { nodes, index, sources: n, refinement })
    }

    /// Returns the number of colors (sources and mixes) in the palette.
    ///
    /// For `n` sources, this is `n + n(n-1)/2 * (refinement - 1)`.
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Says whether the palette has no colors.  Only
    /// [`Palette::default`] is empty.
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }

    /// The refinement the palette was built with.
    pub fn refinement(&self) -> usize { self.refinement }

    /// The nodes of the palette, in canonical order.  Parent
    /// identifiers are indices into this slice.
    pub fn nodes(&self) -> &[ColorNode] { &self.nodes }

    /// The node with identifier `id`, if it belongs to the palette.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        if id.0 < self.nodes.len() { Some(NodeRef::new(&self.nodes, id)) }
        else { None }
    }

    /// Iterate on all colors in canonical order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = NodeRef<'_>> + '_ {
        (0 .. self.nodes.len()).map(|i| NodeRef::new(&self.nodes, NodeId(i)))
    }

    /// Iterate on the source colors, in the order they were given.
    pub fn sources(&self) -> impl ExactSizeIterator<Item = NodeRef<'_>> + '_ {
        self.iter().take(self.sources)
    }

    /// Iterate on the mixed colors in canonical order.
    pub fn mixes(&self) -> impl ExactSizeIterator<Item = NodeRef<'_>> + '_ {
        self.iter().skip(self.sources)
    }

    /// The first node (in canonical order) whose value is `color`.
    pub fn get(&self, color: ColorValue) -> Option<NodeRef<'_>> {
        self.index.get(&color).map(|&id| NodeRef::new(&self.nodes, id))
    }

    /// Return the color of the palette perceptually closest to
    /// `query` (for the CIEDE2000 difference).  When several colors
    /// are at the same distance, the first one in canonical order is
    /// returned.
    pub fn search(&self, query: ColorValue) -> Result<NodeRef<'_>> {
        self.closest(query).map(|(node, _)| node)
    }

    /// Same as [`Palette::search`] but also returns the distance to
    /// `query`.
    pub fn closest(&self, query: ColorValue) -> Result<(NodeRef<'_>, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, node) in self.nodes.iter().enumerate() {
            let d = perceptual_distance(node.value(), query);
            if best.map_or(true, |(_, d_min)| d < d_min) {
                best = Some((i, d));
            }
        }
        let (i, d) = best.ok_or(Error::EmptyPalette)?;
        let node = NodeRef::new(&self.nodes, NodeId(i));
        log::trace!("closest to {query:?}: {node} (ΔE₀₀ = {d:.3})");
        Ok((node, d))
    }
}
