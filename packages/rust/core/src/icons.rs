//! Icon keys to terminal glyphs.

/// Glyph used for keys with no entry.
pub const DEFAULT_GLYPH: &str = "•";

const GLYPHS: &[(&str, &str)] = &[
    ("book", "📖"),
    ("chat", "💬"),
    ("code", "⌨"),
    ("download", "⬇"),
    ("file", "📄"),
    ("image", "🖼"),
    ("key", "🔑"),
    ("mic", "🎤"),
    ("music", "🎵"),
    ("play", "▶"),
    ("rocket", "🚀"),
    ("settings", "⚙"),
    ("shield", "🛡"),
    ("sparkles", "✨"),
    ("star", "★"),
    ("timer", "⏱"),
    ("tools", "🛠"),
    ("video", "🎬"),
    ("warning", "⚠"),
];

/// Resolve an icon key, falling back to [`DEFAULT_GLYPH`].
pub fn glyph(key: &str) -> &'static str {
    GLYPHS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(DEFAULT_GLYPH, |(_, g)| *g)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_and_unknown_keys() {
        assert_eq!(glyph("rocket"), "🚀");
        assert_eq!(glyph("no-such-icon"), DEFAULT_GLYPH);
    }
}
