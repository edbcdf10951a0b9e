use crate::error::ArtError;

/// Density glyphs, from never visited to visited 14 or more times.
pub const DENSITY_GLYPHS: &str = " .o+=*BOX@%&#/^";

pub const START_MARKER: char = 'S';
pub const END_MARKER: char = 'E';

/// The set of characters a panel is drawn with.
///
/// Missing fields in a TOML charset fall back to [`Charset::unicode`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct Charset {
    /// Glyphs by increasing visit count; counts past the end saturate.
    pub density: String,
    pub start: char,
    pub end: char,
    pub vertical: char,
    pub horizontal: char,
    pub open_bracket: char,
    pub close_bracket: char,
    pub header_left: char,
    pub header_right: char,
    pub footer_left: char,
    pub footer_right: char,
}

impl Default for Charset {
    fn default() -> Self {
        Self::unicode()
    }
}

impl Charset {
    /// Heavy box-drawing border.
    pub fn unicode() -> Self {
        Self {
            density: DENSITY_GLYPHS.to_string(),
            start: START_MARKER,
            end: END_MARKER,
            vertical: '┃',
            horizontal: '━',
            open_bracket: '[',
            close_bracket: ']',
            header_left: '┏',
            header_right: '┓',
            footer_left: '┗',
            footer_right: '┛',
        }
    }

    /// Plain ASCII border in the style of `ssh-keygen -lv`.
    pub fn ascii() -> Self {
        Self {
            vertical: '|',
            horizontal: '-',
            header_left: '+',
            header_right: '+',
            footer_left: '+',
            footer_right: '+',
            ..Self::unicode()
        }
    }

    /// Check that the density table is usable and no glyph would break a line.
    pub fn validate(&self) -> Result<(), ArtError> {
        if self.density.is_empty() {
            return Err(ArtError::InvalidCharset(
                "density table must have at least one glyph".into(),
            ));
        }
        let singles = [
            self.start,
            self.end,
            self.vertical,
            self.horizontal,
            self.open_bracket,
            self.close_bracket,
            self.header_left,
            self.header_right,
            self.footer_left,
            self.footer_right,
        ];
        if let Some(c) = self.density.chars().chain(singles).find(|c| c.is_control()) {
            return Err(ArtError::InvalidCharset(format!(
                "control character {:?} cannot be drawn",
                c
            )));
        }
        Ok(())
    }

    /// Density glyphs as a lookup table.
    pub fn density_table(&self) -> Vec<char> {
        self.density.chars().collect()
    }

    /// Parse a charset from TOML and validate it.
    #[cfg(feature = "serde")]
    pub fn from_toml(toml_str: &str) -> Result<Charset, CharsetError> {
        let charset: Charset =
            toml::from_str(toml_str).map_err(|e| CharsetError::Config(e.to_string()))?;
        charset.validate()?;
        Ok(charset)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CharsetError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Invalid(#[from] ArtError),
}

/// Glyph for a visit count, saturating at the densest glyph.
///
/// `table` comes from [`Charset::density_table`] on a validated charset,
/// so it is never empty.
pub(crate) fn density_glyph(table: &[char], count: usize) -> char {
    table[count.min(table.len() - 1)]
}

/// List of all built-in charset names.
pub const BUILTIN_CHARSETS: &[&str] = &["unicode", "ascii"];

/// Load a built-in charset by name.
pub fn builtin_charset(name: &str) -> Option<Charset> {
    match name {
        "unicode" => Some(Charset::unicode()),
        "ascii" => Some(Charset::ascii()),
        _ => None,
    }
}
