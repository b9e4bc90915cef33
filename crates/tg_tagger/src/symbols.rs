use alloc::string::String;
use alloc::vec::Vec;

// -----------------------------------------------------------------------------
// TagSymbols

/// The grammar of an annotation text.
///
/// `key_value` separates a key from its value, `keys_separator` separates
/// the entries: with `(":", " | ")` the text `key:summary | to:string`
/// has two entries.
///
/// The default is `(":", ";")`. An empty separator never splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TagSymbols {
    key_value: &'static str,
    keys_separator: &'static str,
}

impl Default for TagSymbols {
    #[inline]
    fn default() -> Self {
        Self::new(":", ";")
    }
}

impl TagSymbols {
    #[inline]
    pub const fn new(key_value: &'static str, keys_separator: &'static str) -> Self {
        Self {
            key_value,
            keys_separator,
        }
    }

    #[inline]
    pub const fn key_value(&self) -> &'static str {
        self.key_value
    }

    #[inline]
    pub const fn keys_separator(&self) -> &'static str {
        self.keys_separator
    }

    /// Splits `text` by the keys separator, tokens are kept verbatim.
    pub fn values<'t>(&self, text: &'t str) -> impl Iterator<Item = &'t str> + use<'t> {
        let separator = self.keys_separator;
        let mut rest = Some(text);
        core::iter::from_fn(move || {
            let current = rest?;
            if separator.is_empty() {
                rest = None;
                return Some(current);
            }
            match current.split_once(separator) {
                Some((token, tail)) => {
                    rest = Some(tail);
                    Some(token)
                }
                None => {
                    rest = None;
                    Some(current)
                }
            }
        })
    }

    /// Parses `text` into ordered `(key, value)` pairs.
    ///
    /// - Empty tokens are skipped.
    /// - A token without key-value separator gives `(lowercase(token), token)`.
    /// - Otherwise the pair is `(lowercase(first part), second part)`,
    ///   further parts are dropped.
    ///
    /// Keys are lowercased, nothing is trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use tg_tagger::TagSymbols;
    ///
    /// let parsed = TagSymbols::new(":", " | ").parse("key:summary | to:string");
    /// assert_eq!(parsed.find_by_key("KEY"), Some("summary"));
    /// assert_eq!(parsed.find_index_by_key("to"), Some(1));
    ///
    /// let parsed = TagSymbols::default().parse("-");
    /// assert_eq!(parsed.iter().collect::<Vec<_>>(), [("-", "-")]);
    /// ```
    pub fn parse(&self, text: &str) -> ParsedTag {
        let key_value = self.key_value;
        let pairs = self
            .values(text)
            .filter(|token| !token.is_empty())
            .map(|token| {
                let split = if key_value.is_empty() {
                    None
                } else {
                    token.split_once(key_value)
                };
                match split {
                    Some((key, rest)) => {
                        let value = rest.split_once(key_value).map_or(rest, |(value, _)| value);
                        (key.to_lowercase(), String::from(value))
                    }
                    None => (token.to_lowercase(), String::from(token)),
                }
            })
            .collect();
        ParsedTag { pairs }
    }
}

// -----------------------------------------------------------------------------
// ParsedTag

/// Ordered `(key, value)` pairs of an annotation text, keys lowercased.
///
/// Lookups lowercase the requested key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTag {
    pairs: Vec<(String, String)>,
}

impl ParsedTag {
    /// Iterates the pairs in text order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    /// Returns the pair at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(&str, &str)> {
        self.pairs
            .get(index)
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Returns `true` if `key` is present.
    #[inline]
    pub fn exists(&self, key: &str) -> bool {
        self.find_index_by_key(key).is_some()
    }

    /// Returns the index of the first pair with `key`.
    pub fn find_index_by_key(&self, key: &str) -> Option<usize> {
        let key = key.to_lowercase();
        self.pairs.iter().position(|(k, _)| *k == key)
    }

    /// Returns the value of the first pair with `key`.
    pub fn find_by_key(&self, key: &str) -> Option<&str> {
        self.find_index_by_key(key)
            .map(|index| self.pairs[index].1.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{ParsedTag, TagSymbols};
    use alloc::vec::Vec;

    fn pairs(parsed: &ParsedTag) -> Vec<(&str, &str)> {
        parsed.iter().collect()
    }

    #[test]
    fn empty_text() {
        assert!(TagSymbols::default().parse("").is_empty());
        assert!(TagSymbols::new(":", " | ").parse("").is_empty());
        assert!(TagSymbols::new("", "").parse("").is_empty());
    }

    #[test]
    fn bare_tokens() {
        let parsed = TagSymbols::new(":", "|").parse("a|b|c");
        assert_eq!(pairs(&parsed), [("a", "a"), ("b", "b"), ("c", "c")]);

        let parsed = TagSymbols::default().parse("-");
        assert_eq!(pairs(&parsed), [("-", "-")]);
    }

    #[test]
    fn key_values() {
        let parsed = TagSymbols::default().parse("-;a:b");
        assert_eq!(pairs(&parsed), [("-", "-"), ("a", "b")]);

        let parsed = TagSymbols::default().parse("key:value;key2:value2");
        assert_eq!(pairs(&parsed), [("key", "value"), ("key2", "value2")]);
    }

    #[test]
    fn keys_are_lowercased_values_verbatim() {
        let parsed = TagSymbols::default().parse("Key:Value;Flag; x : y ;a:b:c");
        assert_eq!(
            pairs(&parsed),
            [("key", "Value"), ("flag", "Flag"), (" x ", " y "), ("a", "b")]
        );
        assert_eq!(parsed.find_by_key("KEY"), Some("Value"));
        assert!(parsed.exists("flag"));
        assert!(!parsed.exists("x"));
    }

    #[test]
    fn empty_tokens_are_skipped() {
        let parsed = TagSymbols::default().parse(";;a:1;");
        assert_eq!(pairs(&parsed), [("a", "1")]);
        assert_eq!(parsed.find_index_by_key("a"), Some(0));
    }

    #[test]
    fn empty_separators() {
        let parsed = TagSymbols::new(":", "").parse("a:1;b:2");
        assert_eq!(pairs(&parsed), [("a", "1;b")]);

        let parsed = TagSymbols::new("", ";").parse("a:1;B");
        assert_eq!(pairs(&parsed), [("a:1", "a:1"), ("b", "B")]);
    }

    #[test]
    fn parsing_is_pure() {
        let symbols = TagSymbols::new(":", " | ");
        let text = "key:summary | to:string";
        assert_eq!(symbols.parse(text), symbols.parse(text));
        assert_eq!(symbols.values(text).collect::<Vec<_>>(), ["key:summary", "to:string"]);
    }
}
