use super::Headers;

/// Options for generating armored content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArmorOptions {
    /// Armor headers, written as `Key: Value` lines after the opening line.
    pub headers: Headers,
    /// Should a checksum be included? Default to `true`.
    pub include_checksum: bool,
}

impl Default for ArmorOptions {
    fn default() -> Self {
        Self {
            headers: Headers::new(),
            include_checksum: true,
        }
    }
}

impl ArmorOptions {
    /// Appends a `key: value` armor header. Repeated keys produce one line per value.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.entry(key.into()).or_default().push(value.into());
        self
    }

    /// Borrowed form handed to the codec's armor encoder.
    pub(crate) fn to_codec(&self) -> pgp::ArmorOptions<'_> {
        pgp::ArmorOptions {
            headers: (!self.headers.is_empty()).then_some(&self.headers),
            include_checksum: self.include_checksum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_headers_are_omitted() {
        let opts = ArmorOptions::default();
        let codec = opts.to_codec();
        assert!(codec.headers.is_none());
        assert!(codec.include_checksum);
    }

    #[test]
    fn repeated_header_keys_accumulate() {
        let opts = ArmorOptions::default()
            .header("Comment", "first")
            .header("Comment", "second")
            .header("Charset", "UTF-8");

        assert_eq!(
            opts.headers.get("Comment"),
            Some(&vec!["first".to_string(), "second".to_string()])
        );
        assert_eq!(opts.to_codec().headers.map(|h| h.len()), Some(2));
    }
}
