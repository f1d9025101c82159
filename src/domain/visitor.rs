//! Visitor protocol for structured tree traversal.
//!
//! A visitor supplies one capability per tree shape; [`Tree::accept`] picks
//! the matching one. Recursion into sub-trees happens through the visitor
//! calling `accept` again, so each visitor decides its own traversal order.

use std::fmt::Display;

use itertools::Itertools;

use crate::domain::tree::Tree;

/// Polymorphic traversal callback producing a textual result.
pub trait TreeVisitor<T> {
    /// Invoked for the empty tree.
    fn empty(&self) -> String;

    /// Invoked for a non-empty tree with its element and both sub-trees.
    fn node(&self, value: &T, left: &Tree<T>, right: &Tree<T>) -> String;
}

/// Renders the elements in ascending order, comma-separated.
///
/// The empty tree renders as the empty string.
pub struct InOrderVisitor;

impl<T: Display> TreeVisitor<T> for InOrderVisitor {
    fn empty(&self) -> String {
        String::new()
    }

    fn node(&self, value: &T, left: &Tree<T>, right: &Tree<T>) -> String {
        [left.accept(self), value.to_string(), right.accept(self)]
            .iter()
            .filter(|part| !part.is_empty())
            .join(", ")
    }
}

/// Renders the tree's shape as nested parentheses, empty sub-trees as `.`.
pub struct OutlineVisitor;

impl<T: Display> TreeVisitor<T> for OutlineVisitor {
    fn empty(&self) -> String {
        ".".to_string()
    }

    fn node(&self, value: &T, left: &Tree<T>, right: &Tree<T>) -> String {
        format!("({} {} {})", left.accept(self), value, right.accept(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_rendering() {
        let tree = Tree::new().insert(5).insert(3).insert(8);

        assert_eq!(tree.accept(&InOrderVisitor), "3, 5, 8");
        assert_eq!(Tree::<i32>::new().accept(&InOrderVisitor), "");
    }

    #[test]
    fn test_outline_rendering() {
        let tree = Tree::new().insert(5).insert(3);

        assert_eq!(tree.accept(&OutlineVisitor), "((. 3 .) 5 .)");
        assert_eq!(Tree::<i32>::new().accept(&OutlineVisitor), ".");
    }
}
