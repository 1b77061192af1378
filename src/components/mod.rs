//! Page components for System Design Deconstructed.

mod code_block;
mod concept_card;
mod concept_nav;
mod header;
mod interactive_demo;

pub use code_block::CodeBlock;
pub use concept_card::ConceptCard;
pub use concept_nav::ConceptNav;
pub use header::Header;
pub use interactive_demo::InteractiveDemo;
