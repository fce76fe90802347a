use std::collections::HashMap;

const STANDARD_PROTOCOLS: &[(&str, &str)] = &[
    (
        "cardiac arrest",
        "Advise the caller to begin CPR immediately and ensure someone is calling for an AED.",
    ),
    (
        "choking",
        "If the person cannot breathe, advise performing the Heimlich maneuver immediately.",
    ),
    (
        "fire",
        "Ensure the caller evacuates immediately and avoids smoke-filled areas.",
    ),
];

/// Fixed advisory text for known scenario types.
///
/// Keys are stored lower-case and matched exactly; callers normalize before
/// calling [`ProtocolCatalog::lookup`]. The catalog is never mutated after
/// construction, so it can be shared behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct ProtocolCatalog {
    entries: HashMap<String, String>,
}

impl ProtocolCatalog {
    pub fn new<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into().to_lowercase(), v.into()))
                .collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_PROTOCOLS.iter().copied())
    }

    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ProtocolCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
