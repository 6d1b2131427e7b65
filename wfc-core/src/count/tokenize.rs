/// How to treat the empty strings produced between adjacent delimiters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyTokens {
    /// Drop them; only real words are counted.
    #[default]
    Skip,
    /// Count them as the empty word, with classic regex-split rules: leading
    /// and interior empties are kept, trailing ones are dropped, and a text
    /// without any delimiter is returned whole (so empty text yields `""`).
    Keep,
}

/// Concatenate the lines of `raw` with nothing in between.
///
/// `\n`, `\r\n` and lone `\r` terminators are all removed.
pub fn join_lines(raw: &str) -> String {
    raw.chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Split already-lowercased text on every character that is not an ASCII letter.
pub fn tokenize(text: &str, empty: EmptyTokens) -> Vec<&str> {
    let pieces = text.split(|c: char| !c.is_ascii_alphabetic());
    match empty {
        EmptyTokens::Skip => pieces.filter(|t| !t.is_empty()).collect(),
        EmptyTokens::Keep => {
            let mut tokens: Vec<&str> = pieces.collect();
            if tokens.len() == 1 {
                return tokens;
            }
            while tokens.last().is_some_and(|t| t.is_empty()) {
                tokens.pop();
            }
            tokens
        }
    }
}

/// Full text pipeline for one input: join lines, fold case, tokenize.
pub fn normalize(raw: &str) -> String {
    join_lines(raw).to_ascii_lowercase()
}
