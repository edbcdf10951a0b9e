use std::str::FromStr;

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::bits::bit_pairs;
use crate::charset::{density_glyph, Charset};
use crate::error::ArtError;
use crate::histogram::Histogram;
use crate::walk::{trace, Dims, Position};

pub const DEFAULT_KEY_NAME: &str = "RSA 4096";
pub const DEFAULT_HASH_NAME: &str = "SHA256";

/// Which border line a caption is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionPosition {
    Header,
    Footer,
}

impl FromStr for CaptionPosition {
    type Err = ArtError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "header" => Ok(CaptionPosition::Header),
            "footer" => Ok(CaptionPosition::Footer),
            other => Err(ArtError::UnknownCaptionPosition(other.to_string())),
        }
    }
}

/// Build a header or footer line of exactly `dims.width + 2` characters.
///
/// The label is cut to `dims.width - 2` characters and bracketed. The
/// remaining room is split between two horizontal runs, with the odd
/// character going to the left run.
pub(crate) fn caption_line(
    label: &str,
    position: CaptionPosition,
    dims: Dims,
    charset: &Charset,
) -> String {
    let (left_corner, right_corner) = match position {
        CaptionPosition::Header => (charset.header_left, charset.header_right),
        CaptionPosition::Footer => (charset.footer_left, charset.footer_right),
    };

    let room = dims.width - 2;
    let label: String = label.chars().take(room).collect();
    let slack = room - label.chars().count();
    let right = slack / 2;
    let left = slack - right;

    let mut line = String::with_capacity((dims.width + 2) * 4);
    line.push(left_corner);
    line.extend(std::iter::repeat(charset.horizontal).take(left));
    line.push(charset.open_bracket);
    line.push_str(&label);
    line.push(charset.close_bracket);
    line.extend(std::iter::repeat(charset.horizontal).take(right));
    line.push(right_corner);
    line
}

/// Draw a histogram as a bordered panel.
///
/// The center cell always shows the start marker and `end` the end
/// marker, applied in that order.
pub(crate) fn panel(
    histogram: &Histogram,
    end: Position,
    key_name: &str,
    hash_name: &str,
    charset: &Charset,
) -> String {
    let dims = histogram.dims();
    let table = charset.density_table();

    let mut cells: Vec<char> = histogram
        .counts()
        .iter()
        .map(|&count| density_glyph(&table, count))
        .collect();
    cells[dims.index(dims.center())] = charset.start;
    cells[dims.index(end)] = charset.end;

    let mut lines = Vec::with_capacity(dims.height + 2);
    lines.push(caption_line(key_name, CaptionPosition::Header, dims, charset));
    for row in cells.chunks(dims.width) {
        let mut line = String::with_capacity((dims.width + 2) * 4);
        line.push(charset.vertical);
        line.extend(row);
        line.push(charset.vertical);
        lines.push(line);
    }
    lines.push(caption_line(hash_name, CaptionPosition::Footer, dims, charset));
    lines.join("\n")
}

/// Render `bytes` as random art on a default-charset grid.
pub fn render(
    bytes: &[u8],
    key_name: &str,
    hash_name: &str,
    dims: Dims,
) -> Result<String, ArtError> {
    let renderer = Renderer::new(RendererConfig {
        dims,
        ..RendererConfig::default()
    })?;
    Ok(renderer.render(bytes, key_name, hash_name))
}

/// Renderer configuration.
#[derive(Debug, Clone, Default)]
pub struct RendererConfig {
    pub dims: Dims,
    pub charset: Charset,
}

/// One digest to render together with its captions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub bytes: Vec<u8>,
    pub key_name: String,
    pub hash_name: String,
}

impl Fingerprint {
    pub fn new(bytes: Vec<u8>, key_name: impl Into<String>, hash_name: impl Into<String>) -> Self {
        Self {
            bytes,
            key_name: key_name.into(),
            hash_name: hash_name.into(),
        }
    }
}

/// A validated grid and charset, ready to render any number of digests.
#[derive(Debug, Clone)]
pub struct Renderer {
    config: RendererConfig,
}

impl Renderer {
    pub fn new(config: RendererConfig) -> Result<Self, ArtError> {
        config.dims.validate()?;
        config.charset.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// Visit counts and end position for one digest.
    pub fn histogram(&self, bytes: &[u8]) -> (Histogram, Position) {
        let dims = self.config.dims;

        // Stage 1: Bit-pairs
        let pairs = bit_pairs(bytes);

        // Stage 2: Walk
        let path = trace(&pairs, dims);
        let end = path.last().copied().unwrap_or_else(|| dims.center());

        // Stage 3: Histogram
        (Histogram::from_path(&path, dims), end)
    }

    /// Render one digest.
    pub fn render(&self, bytes: &[u8], key_name: &str, hash_name: &str) -> String {
        let (histogram, end) = self.histogram(bytes);

        // Stage 4: Panel
        panel(&histogram, end, key_name, hash_name, &self.config.charset)
    }

    /// Render many digests, in input order.
    pub fn render_batch(&self, fingerprints: &[Fingerprint]) -> Vec<String> {
        let render_one =
            |fp: &Fingerprint| -> String { self.render(&fp.bytes, &fp.key_name, &fp.hash_name) };

        #[cfg(feature = "parallel")]
        let arts: Vec<String> = fingerprints.par_iter().map(render_one).collect();

        #[cfg(not(feature = "parallel"))]
        let arts: Vec<String> = fingerprints.iter().map(render_one).collect();

        arts
    }
}
