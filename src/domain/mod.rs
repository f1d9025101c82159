//! Domain layer: the persistent tree, its visitors, and the cat entity
//!
//! This layer is independent of external concerns (no I/O, no configuration).

pub mod display;
pub mod entities;
pub mod error;
pub mod tree;
pub mod visitor;

pub use display::TreeRender;
pub use entities::Cat;
pub use error::DomainError;
pub use tree::{Tree, TreeIter};
pub use visitor::{InOrderVisitor, OutlineVisitor, TreeVisitor};
