use crate::newick::leaves::extract_leaf_names;
use crate::newick::rewrite::rewrite_tree;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum UniquifyError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of processing one collection of trees.
#[derive(Debug, Clone)]
pub struct UniquifyResult {
    /// Output trees, one per input tree, in input order.
    pub trees: Vec<String>,
    /// True when any leaf name in any tree contains an underscore; in that
    /// case the input is assumed to already follow the speciesid_geneid
    /// convention and `trees` are verbatim copies.
    pub underscores_detected: bool,
    /// Per tree, the number of distinct leaf labels that occur more than
    /// once. Empty when `underscores_detected` is true (no duplicate
    /// analysis is performed on that branch).
    pub duplicates_per_tree: Vec<usize>,
}

impl UniquifyResult {
    /// Total count of duplicated leaf labels across all trees.
    pub fn total_duplicates(&self) -> usize {
        self.duplicates_per_tree.iter().sum()
    }
}

/// Splits raw input text into tree lines: one NEWICK string per non-blank
/// line, trimmed, in input order. Blank lines are dropped entirely.
pub fn read_tree_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Checks if any leaf name contains an underscore across all trees.
pub fn has_underscored_leaves(trees: &[String]) -> bool {
    trees.iter().any(|tree| {
        extract_leaf_names(tree).iter().any(|leaf| leaf.contains('_'))
    })
}

/// Builds the duplicate registry for a single tree: leaf label text mapped
/// to its total occurrence count, restricted to counts greater than one.
pub fn duplicate_counts(tree: &str) -> HashMap<String, usize> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for leaf in extract_leaf_names(tree) {
        *counts.entry(leaf).or_insert(0) += 1;
    }
    counts.retain(|_, count| *count > 1);
    counts
}

/// Processes a collection of trees.
///
/// The underscore decision is global: a single underscore in any leaf of
/// any tree switches the whole collection to verbatim passthrough, even
/// for trees that contain no underscores themselves. Otherwise each tree
/// is checked for duplicate leaf labels and rewritten when any are found.
///
/// Re-running on the same input always produces identical output; suffix
/// assignment within a tree is strictly left-to-right.
pub fn uniquify_trees(trees: &[String]) -> UniquifyResult {
    if has_underscored_leaves(trees) {
        return UniquifyResult {
            trees: trees.to_vec(),
            underscores_detected: true,
            duplicates_per_tree: Vec::new(),
        };
    }

    let mut rv: Vec<String> = Vec::with_capacity(trees.len());
    let mut duplicates_per_tree: Vec<usize> = Vec::with_capacity(trees.len());

    for tree in trees {
        let registry = duplicate_counts(tree);
        duplicates_per_tree.push(registry.len());
        if registry.is_empty() {
            rv.push(tree.clone());
        } else {
            rv.push(rewrite_tree(tree, &registry));
        }
    }

    UniquifyResult {
        trees: rv,
        underscores_detected: false,
        duplicates_per_tree,
    }
}
