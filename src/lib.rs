mod newick;
mod uniquify;

pub use newick::leaves::extract_leaf_names;
pub use newick::rewrite::rewrite_tree;
pub use uniquify::UniquifyError;
pub use uniquify::UniquifyResult;
pub use uniquify::duplicate_counts;
pub use uniquify::has_underscored_leaves;
pub use uniquify::read_tree_lines;
pub use uniquify::uniquify_trees;
