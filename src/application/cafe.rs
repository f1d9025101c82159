//! Cat cafe facade
//!
//! Owns the clowder and answers lookups over it. Lookups are predicate
//! scans; no query depends on the tree's sort order.

use tracing::{debug, instrument};

use crate::domain::{Cat, Tree, TreeVisitor};

/// Manages a clowder of cats backed by a persistent tree.
///
/// Every insertion publishes a new tree snapshot; snapshots handed out
/// earlier via [`CatCafe::clowder`] stay valid and unchanged.
#[derive(Debug, Default)]
pub struct CatCafe {
    clowder: Tree<Cat>,
}

impl CatCafe {
    /// Creates a cafe with an empty clowder.
    pub fn new() -> Self {
        Self {
            clowder: Tree::new(),
        }
    }

    /// Adds a cat to the clowder.
    ///
    /// Cannot fail: validity is enforced when the [`Cat`] is constructed.
    #[instrument(level = "debug", skip(self))]
    pub fn add_cat(&mut self, cat: Cat) {
        self.clowder = self.clowder.insert(cat);
    }

    /// Number of cats in the clowder.
    pub fn cat_count(&self) -> usize {
        self.clowder.size()
    }

    /// Finds any cat with the given name.
    ///
    /// Unknown names yield `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn cat_by_name(&self, name: &str) -> Option<&Cat> {
        self.clowder.iter().find(|cat| cat.name() == name)
    }

    /// Finds any cat whose weight lies in `[min_weight, max_weight)`.
    ///
    /// An invalid range (negative minimum, or maximum below minimum) yields
    /// `None` rather than an error.
    #[instrument(level = "debug", skip(self))]
    pub fn cat_by_weight(&self, min_weight: i32, max_weight: i32) -> Option<&Cat> {
        if min_weight < 0 || max_weight < min_weight {
            debug!("invalid weight range: [{}, {})", min_weight, max_weight);
            return None;
        }

        self.clowder
            .iter()
            .find(|cat| cat.weight() >= min_weight && cat.weight() < max_weight)
    }

    /// Hands the clowder to a visitor and returns its rendering.
    pub fn accept(&self, visitor: &dyn TreeVisitor<Cat>) -> String {
        self.clowder.accept(visitor)
    }

    /// Read access to the current clowder snapshot.
    pub fn clowder(&self) -> &Tree<Cat> {
        &self.clowder
    }
}
