use leafuniq::{duplicate_counts, rewrite_tree};
use std::collections::HashMap;

#[test]
fn test_rewrite_suffixes_duplicates_in_order() {
    let newick = "((A,B),(B,C));";
    let registry = duplicate_counts(newick);
    assert_eq!(registry, HashMap::from([("B".to_string(), 2)]));

    let rewritten = rewrite_tree(newick, &registry);
    assert_eq!(rewritten, "((A,B_1),(B_2,C));");
}

#[test]
fn test_rewrite_suffix_completeness() {
    // A label occurring k times receives _1 through _k, left to right.
    let newick = "((X,X),(X,(X,Y)));";
    let registry = duplicate_counts(newick);
    assert_eq!(registry.get("X"), Some(&4));

    let rewritten = rewrite_tree(newick, &registry);
    assert_eq!(rewritten, "((X_1,X_2),(X_3,(X_4,Y)));");
}

#[test]
fn test_rewrite_empty_registry_is_identity() {
    let newick = "(A,B,C);";
    let rewritten = rewrite_tree(newick, &HashMap::new());
    assert_eq!(rewritten, newick);
}

#[test]
fn test_rewrite_preserves_branch_supports() {
    let newick = "((A,B)90,(A,C)85);";
    let registry = duplicate_counts(newick);

    let rewritten = rewrite_tree(newick, &registry);
    assert_eq!(rewritten, "((A_1,B)90,(A_2,C)85);");
}

#[test]
fn test_rewrite_support_colliding_with_duplicate_leaf_name() {
    // A tree with two leaves literally named "90" and a support value of
    // 90: the support follows ')' and is numeric, so it passes through
    // unsuffixed, while both leaves are suffixed.
    let newick = "((90,A)90,(90,B));";
    let registry = duplicate_counts(newick);
    assert_eq!(registry.get("90"), Some(&2));

    let rewritten = rewrite_tree(newick, &registry);
    assert_eq!(rewritten, "((90_1,A)90,(90_2,B));");
}

#[test]
fn test_rewrite_preserves_branch_lengths() {
    let newick = "((A:0.1,B:0.2)90:0.3,(B:0.4,C:0.5):0.6);";
    let registry = duplicate_counts(newick);
    assert_eq!(registry.get("B"), Some(&2));

    let rewritten = rewrite_tree(newick, &registry);
    assert_eq!(rewritten, "((A:0.1,B_1:0.2)90:0.3,(B_2:0.4,C:0.5):0.6);");
}

#[test]
fn test_rewrite_preserves_structural_characters() {
    let test_cases = [
        "((A,B),(B,C));",
        "((A:0.1,B:0.2)95,(B:0.3,C:0.4)88);",
        "(((X,X),X),(X,Y));",
    ];

    for newick in test_cases {
        let registry = duplicate_counts(newick);
        let rewritten = rewrite_tree(newick, &registry);

        for structural in ['(', ')', ',', ';'] {
            let n_in = newick.matches(structural).count();
            let n_out = rewritten.matches(structural).count();
            assert_eq!(
                n_in, n_out,
                "Count of '{}' changed for tree: {}",
                structural, newick
            );
        }
    }
}

#[test]
fn test_rewrite_is_deterministic() {
    let newick = "((A,B),(B,A),(A,C));";
    let registry = duplicate_counts(newick);

    let first = rewrite_tree(newick, &registry);
    let second = rewrite_tree(newick, &registry);
    assert_eq!(first, second);
    assert_eq!(first, "((A_1,B_1),(B_2,A_2),(A_3,C));");
}
