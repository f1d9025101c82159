//! Terminal rendering of trees via termtree.

use std::fmt::Display;

use crate::domain::tree::Tree;

/// Conversion into a [`termtree::Tree`] for structured terminal display.
pub trait TreeRender {
    fn to_tree_string(&self) -> termtree::Tree<String>;
}

impl<T: Display> TreeRender for Tree<T> {
    fn to_tree_string(&self) -> termtree::Tree<String> {
        match self {
            Tree::Empty => termtree::Tree::new("(empty)".to_string()),
            Tree::Node {
                value, left, right, ..
            } => {
                let leaves: Vec<_> = [left, right]
                    .into_iter()
                    .filter(|sub| !sub.is_empty())
                    .map(|sub| sub.to_tree_string())
                    .collect();

                termtree::Tree::new(value.to_string()).with_leaves(leaves)
            }
        }
    }
}
