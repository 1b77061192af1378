//! System Design Deconstructed Core Library
//!
//! Everything behind the page that is not rendering: the concept registry,
//! the demo counter, responsive layout classification, navigation scroll
//! requests, motion presets, the code highlighter and the page plan.
//!
//! ## Quick Start
//!
//! ```
//! use deconstructed_core::{CounterState, Direction, LayoutMode, PagePlan, CONCEPTS};
//!
//! let mut counter = CounterState::new();
//! counter.increment();
//! assert_eq!(counter.value(), 1);
//! assert_eq!(counter.last_direction(), Direction::Increased);
//!
//! let plan = PagePlan::compose(LayoutMode::from_width(800.0), &CONCEPTS);
//! assert!(plan.sidebar.is_none());
//! assert_eq!(plan.card_indices().len(), CONCEPTS.len());
//! ```

pub mod concept;
pub mod counter;
pub mod error;
pub mod highlight;
pub mod layout;
pub mod motion;
pub mod nav;
pub mod page;

// Re-exports
pub use concept::{validate_registry, ConceptRecord, IconName, CONCEPTS};
pub use counter::{CounterState, Direction};
pub use error::{ContentError, ContentResult};
pub use highlight::{highlight, HighlightedCode, HighlightedLine, Language, Token, TokenKind};
pub use layout::{LayoutMode, LayoutTracker, COMPACT_BREAKPOINT};
pub use motion::{Easing, RevealLatch, SlideVariants, Spring, Transition};
pub use nav::{nav_entries, NavEntry, ScrollCoordinator, ScrollRequest, SCROLL_OFFSET_PX};
pub use page::{Block, PagePlan};
