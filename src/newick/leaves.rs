use super::is_token_delimiter;

/// Checks if a character can be part of a branch length or branch support
/// annotation.
///
/// Covers digits, the decimal point, the exponent marker, and the minus
/// sign. Note that `+` is deliberately not part of this set; annotations
/// with an explicit plus sign are left in place.
fn is_annotation_char(character: char) -> bool {
    character.is_ascii_digit() || matches!(character, '.' | 'e' | 'E' | '-')
}

/// Removes branch lengths (`:0.123`, `:1e-5`, ...) from a NEWICK string.
///
/// A colon is removed together with the following run of annotation
/// characters only when that run is non-empty; a bare colon stays.
fn strip_branch_lengths(s: &str) -> String {
    let mut rv = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(character) = chars.next() {
        if character == ':' {
            let mut stripped = false;
            while let Some(&next) = chars.peek() {
                if is_annotation_char(next) {
                    chars.next();
                    stripped = true;
                } else {
                    break;
                }
            }
            if !stripped {
                rv.push(character);
            }
        } else {
            rv.push(character);
        }
    }
    rv
}

/// Removes branch support values (`)95`, `)0.87`, ...) from a NEWICK
/// string. The closing parenthesis itself is preserved.
fn strip_branch_supports(s: &str) -> String {
    let mut rv = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(character) = chars.next() {
        rv.push(character);
        if character == ')' {
            while let Some(&next) = chars.peek() {
                if is_annotation_char(next) {
                    chars.next();
                } else {
                    break;
                }
            }
        }
    }
    rv
}

/// Extracts all leaf names from a NEWICK string, in order of appearance.
///
/// Branch lengths and branch support values are stripped first, then the
/// remaining text is split into maximal runs of non-delimiter characters.
/// Internal node labels, if present, are returned as well; for the trees
/// this crate targets (leaf labels plus optional numeric supports) the
/// result is the leaf list.
///
/// Pure function of its input; no validation is performed.
pub fn extract_leaf_names(newick: &str) -> Vec<String> {
    let stripped = strip_branch_supports(&strip_branch_lengths(newick));
    stripped
        .trim()
        .split(is_token_delimiter)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}
