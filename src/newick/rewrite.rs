use super::is_token_delimiter;
use std::collections::HashMap;

/// Checks if a token looks like a numeric branch support value.
///
/// Matches runs of digits, decimal points, exponent markers, and signs.
/// Lexically this cannot be told apart from a leaf named `90`; the caller
/// combines this check with positional context (does the token follow a
/// closing parenthesis) to classify the token.
fn is_support_value(token: &str) -> bool {
    !token.is_empty()
        && token.chars().all(|character| {
            character.is_ascii_digit()
                || matches!(character, '.' | 'e' | 'E' | '+' | '-')
        })
}

/// Rewrites a single NEWICK tree so that duplicate leaf labels carry
/// `_1`, `_2`, ... suffixes in order of appearance.
///
/// `duplicates` maps leaf label text to its total occurrence count within
/// this tree, restricted to labels occurring more than once (see
/// [duplicate_counts](crate::duplicate_counts)). Labels not in the map and
/// branch support values pass through unchanged, as do all structural
/// characters. The scan operates on the original, unstripped string.
///
/// Classification of a bare token uses local context only: a token whose
/// nearest preceding non-whitespace character is `)` and whose text is
/// purely numeric is taken to be a branch support. Leaf names follow `(`
/// or `,`, so they are never hidden by this rule.
///
/// Malformed NEWICK is not detected; the scan produces best-effort output
/// and never fails.
pub fn rewrite_tree(
    newick: &str,
    duplicates: &HashMap<String, usize>,
) -> String {
    if duplicates.is_empty() {
        return newick.to_string();
    }

    let chars: Vec<char> = newick.chars().collect();
    let mut rv = String::with_capacity(newick.len() + duplicates.len() * 4);
    let mut suffix_counters: HashMap<&str, usize> =
        duplicates.keys().map(|label| (label.as_str(), 0)).collect();

    let mut i: usize = 0;
    while i < chars.len() {
        let character = chars[i];

        if is_token_delimiter(character) {
            rv.push(character);
            i += 1;
            continue;
        }

        // Capture the maximal token starting at i.
        let mut j = i;
        while j < chars.len() && !is_token_delimiter(chars[j]) {
            j += 1;
        }
        let token: String = chars[i..j].iter().collect();

        // Look back past whitespace to the nearest preceding character.
        let mut prev_char: Option<char> = None;
        let mut k = i;
        while k > 0 {
            k -= 1;
            if !chars[k].is_whitespace() {
                prev_char = Some(chars[k]);
                break;
            }
        }

        if prev_char == Some(')') && is_support_value(&token) {
            // Branch support value attached to an internal node.
            rv.push_str(&token);
        } else if let Some(counter) = suffix_counters.get_mut(token.as_str())
        {
            *counter += 1;
            rv.push_str(&format!("{token}_{counter}"));
        } else {
            rv.push_str(&token);
        }

        i = j;
    }

    rv
}
