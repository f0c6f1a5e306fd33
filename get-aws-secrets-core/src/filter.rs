//! Key filter parsing

/// Split a comma- or whitespace-delimited list into distinct trimmed tokens.
///
/// Empty tokens are discarded and duplicates collapse to their first
/// occurrence, so the result keeps the caller's ordering.
pub fn split_list(raw: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    for token in raw.split(|c: char| c == ',' || c.is_whitespace()) {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        if !tokens.iter().any(|t| t == token) {
            tokens.push(token.to_string());
        }
    }
    tokens
}

/// Allow-list of keys restricting which entries survive into the final
/// output. An empty filter permits everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyFilter {
    keys: Vec<String>,
}

impl KeyFilter {
    /// Parse a raw `SECRETS_FILTER` value. Malformed input degrades to the
    /// empty (unrestricting) filter; there is no error path.
    pub fn parse(raw: &str) -> Self {
        Self {
            keys: split_list(raw),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k == key)
    }

    /// Whether a key survives this filter: empty filters permit everything.
    pub fn permits(&self, key: &str) -> bool {
        self.is_empty() || self.contains(key)
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}
