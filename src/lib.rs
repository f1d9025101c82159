//! catcafe: an in-memory catalog of named, weighted cats.
//!
//! The catalog is backed by [`Tree`], a persistent binary search tree:
//! every insertion returns a new tree value and leaves previously observed
//! snapshots untouched, sharing unchanged sub-trees instead of copying them.
//! Traversal is exposed two ways: a lazy in-order iterator and a
//! [`TreeVisitor`] protocol that dispatches on the tree's shape.
//!
//! # Example
//!
//! ```
//! use catcafe::{Cat, CatCafe};
//!
//! let mut cafe = CatCafe::new();
//! cafe.add_cat(Cat::new("Whiskers", 4)?);
//! cafe.add_cat(Cat::new("Tom", 8)?);
//!
//! assert_eq!(cafe.cat_count(), 2);
//! assert_eq!(cafe.cat_by_name("Tom").map(Cat::weight), Some(8));
//! assert!(cafe.cat_by_weight(2, 5).is_some());
//! # Ok::<(), catcafe::DomainError>(())
//! ```

pub mod application;
pub mod domain;
pub mod util;

pub use application::CatCafe;
pub use domain::{Cat, DomainError, InOrderVisitor, OutlineVisitor, Tree, TreeRender, TreeVisitor};
