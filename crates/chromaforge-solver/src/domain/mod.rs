//! Color domains and the variable store.
//!
//! Each vertex is a variable whose domain is a set of candidate colors.
//! The [`VariableStore`] owns every domain together with the partial
//! assignment and the incremental counters the search reads at each node.

mod store;


use bit_set::BitSet;

use chromaforge_core::Color;

pub use store::VariableStore;

const BLOCK_BITS: usize = 32;

/// Set of candidate colors for one vertex.
///
/// Backed by a [`BitSet`]; membership, removal and reinsertion are O(1).
///
/// # Example
///
/// ```
/// use chromaforge_solver::domain::ColorDomain;
///
/// let mut domain = ColorDomain::full(5);
/// assert_eq!(domain.len(), 5);
///
/// assert!(domain.remove(1));
/// assert_eq!(domain.count_below(3), 2);
/// assert_eq!(domain.iter_below(4).collect::<Vec<_>>(), vec![0, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorDomain {
    colors: BitSet,
}

impl ColorDomain {
    /// Domain holding colors `0..size`.
    pub fn full(size: usize) -> Self {
        let mut colors = BitSet::with_capacity(size);
        for c in 0..size {
            colors.insert(c);
        }
        Self { colors }
    }

    /// Domain holding no color.
    pub fn empty() -> Self {
        Self {
            colors: BitSet::new(),
        }
    }

    pub fn contains(&self, color: Color) -> bool {
        self.colors.contains(color)
    }

    /// Inserts `color`. Returns false if it was already present.
    pub fn insert(&mut self, color: Color) -> bool {
        self.colors.insert(color)
    }

    /// Removes `color`. Returns false if it was absent.
    pub fn remove(&mut self, color: Color) -> bool {
        self.colors.remove(color)
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Smallest color in the domain.
    pub fn min(&self) -> Option<Color> {
        self.colors.iter().next()
    }

    /// Number of colors strictly below `limit`.
    ///
    /// This is the live domain size under a color ceiling. It masks whole
    /// blocks of the underlying bit vector instead of iterating bits.
    pub fn count_below(&self, limit: Color) -> usize {
        let mut remaining = limit;
        let mut count = 0;
        for block in self.colors.get_ref().blocks() {
            if remaining == 0 {
                break;
            }
            if remaining >= BLOCK_BITS {
                count += block.count_ones() as usize;
                remaining -= BLOCK_BITS;
            } else {
                let mask = (1u32 << remaining) - 1;
                count += (block & mask).count_ones() as usize;
                remaining = 0;
            }
        }
        count
    }

    /// Colors strictly below `limit`, ascending.
    pub fn iter_below(&self, limit: Color) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().take_while(move |&c| c < limit)
    }

    /// All colors, ascending.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter()
    }
}

impl FromIterator<Color> for ColorDomain {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self {
            colors: iter.into_iter().collect(),
        }
    }
}
