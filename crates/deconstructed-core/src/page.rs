//! Page composition.
//!
//! Decides which blocks go where for a layout mode. The view walks the
//! plan; it makes no layout decisions of its own.

use crate::concept::ConceptRecord;
use crate::layout::LayoutMode;

/// A top-level block on the page
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Block {
    Header,
    CounterDemo,
    Navigation,
    /// Card for the registry record at this index
    Card(usize),
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PagePlan {
    pub mode: LayoutMode,
    /// Sticky sidebar, wide layout only
    pub sidebar: Option<Vec<Block>>,
    pub main: Vec<Block>,
}

impl PagePlan {
    pub fn compose(mode: LayoutMode, registry: &[ConceptRecord]) -> Self {
        let cards = (0..registry.len()).map(Block::Card);

        match mode {
            LayoutMode::Compact => Self {
                mode,
                sidebar: None,
                main: [Block::Header, Block::CounterDemo]
                    .into_iter()
                    .chain(cards)
                    .collect(),
            },
            LayoutMode::Wide => Self {
                mode,
                sidebar: Some(vec![Block::Header, Block::CounterDemo, Block::Navigation]),
                main: cards.collect(),
            },
        }
    }

    /// Registry indices of the cards, in render order
    pub fn card_indices(&self) -> Vec<usize> {
        self.sidebar
            .iter()
            .flatten()
            .chain(self.main.iter())
            .filter_map(|b| match b {
                Block::Card(i) => Some(*i),
                _ => None,
            })
            .collect()
    }
}
