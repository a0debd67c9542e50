use clap::Parser;
use leafuniq::{UniquifyError, read_tree_lines, uniquify_trees};
use std::fs;
use std::path::PathBuf;

/// Uniquify duplicate leaf names in NEWICK gene trees by adding suffixes.
///
/// Multi-copy genes may share a name within a tree, e.g.
/// ((speciesA,speciesB),(speciesB,speciesC)). When no leaf name in the
/// whole file contains an underscore, duplicate leaves are suffixed with
/// _1, _2, _3, ... to make them unique. Otherwise the file is assumed to
/// already use the speciesid_geneid convention and is copied unchanged.
#[derive(Parser)]
#[command(name = "leafuniq", version)]
struct Cli {
    /// Input file, one NEWICK tree per line.
    input: PathBuf,
    /// Output file for the processed trees.
    output: PathBuf,
}

fn main() -> Result<(), UniquifyError> {
    let cli = Cli::parse();

    let content = fs::read_to_string(&cli.input)?;
    let trees = read_tree_lines(&content);

    let result = uniquify_trees(&trees);

    if result.underscores_detected {
        println!(
            "Leaf names contain underscores. Assuming format is speciesid_geneid."
        );
        println!("No modification needed. Copying input to output.");
    } else {
        println!("No underscores found in leaf names. Checking for duplicates...");
        for (i, &n_duplicates) in result.duplicates_per_tree.iter().enumerate()
        {
            // Show the first few examples only.
            if n_duplicates > 0 && i < 5 {
                println!(
                    "  Tree {}: Found {} species with duplicates",
                    i + 1,
                    n_duplicates
                );
            }
        }
        println!("Total trees with duplicates: {}", result.total_duplicates());
        println!("Writing uniquified trees to {}", cli.output.display());
    }

    let mut out = String::with_capacity(content.len());
    for tree in &result.trees {
        out.push_str(tree);
        out.push('\n');
    }
    fs::write(&cli.output, out)?;

    println!("Done!");
    Ok(())
}
