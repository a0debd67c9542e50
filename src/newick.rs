pub(crate) mod leaves;
pub(crate) mod rewrite;

/// Checks if a character is a NEWICK structural delimiter.
///
/// The same boundary set is used by the leaf extractor and by the
/// rewriting scan: parentheses, comma, semicolon, colon, and whitespace.
pub(crate) fn is_token_delimiter(character: char) -> bool {
    matches!(character, '(' | ')' | ',' | ';' | ':')
        || character.is_whitespace()
}
