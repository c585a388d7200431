//! Coloring results and feasibility checks.

use std::fmt;

use crate::graph::{Color, Graph, VertexId};

/// Final answer of a solve: color count, optimality proof flag and one color per vertex.
///
/// `Display` renders the two-line output contract:
///
/// ```
/// use chromaforge_core::ColoringResult;
///
/// let result = ColoringResult::new(2, true, vec![0, 1, 0, 1]);
/// assert_eq!(result.to_string(), "2 1\n0 1 0 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoringResult {
    /// Number of distinct colors used.
    pub color_count: usize,
    /// True only when the search proved no coloring with fewer colors exists.
    pub is_optimal: bool,
    /// colors[v]: color of vertex v.
    pub colors: Vec<Color>,
}

impl ColoringResult {
    pub fn new(color_count: usize, is_optimal: bool, colors: Vec<Color>) -> Self {
        Self {
            color_count,
            is_optimal,
            colors,
        }
    }

    /// The always-feasible coloring giving every vertex its own color.
    pub fn trivial(n: usize) -> Self {
        Self::new(n, false, (0..n).collect())
    }

    /// Returns the color of vertex `v`.
    pub fn color_of(&self, v: VertexId) -> Color {
        self.colors[v]
    }
}

impl fmt::Display for ColoringResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.color_count, u8::from(self.is_optimal))?;
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Number of distinct colors appearing in `colors`.
pub fn distinct_colors(colors: &[Color]) -> usize {
    let Some(&max) = colors.iter().max() else {
        return 0;
    };
    let mut seen = vec![false; max + 1];
    let mut count = 0;
    for &c in colors {
        if !seen[c] {
            seen[c] = true;
            count += 1;
        }
    }
    count
}

/// Edges whose endpoints share a color. Self-loops always conflict.
pub fn conflicting_edges(graph: &Graph, colors: &[Color]) -> Vec<(VertexId, VertexId)> {
    let mut res: Vec<(VertexId, VertexId)> = graph
        .edges()
        .iter()
        .copied()
        .filter(|&(u, v)| colors[u] == colors[v])
        .collect();
    res.extend(graph.self_loops().iter().map(|&v| (v, v)));
    res
}

/// Returns true if `colors` assigns one color per vertex and no edge is monochromatic.
pub fn is_proper(graph: &Graph, colors: &[Color]) -> bool {
    colors.len() == graph.vertex_count() && conflicting_edges(graph, colors).is_empty()
}
