//! Text-to-path collaborator.
//!
//! The engine never typesets text itself. A [`TextRenderer`] turns a content string into
//! path fragments, usually by reading an SVG document produced by an external typesetter.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Context;
use kurbo::{Point, Rect};

use crate::foundation::error::{VectorError, VectorResult};

pub(crate) mod glyphs;

pub use glyphs::parse_glyph_document;

/// Where text documents live, threaded explicitly from the scene configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextContext {
    /// Working directory; prepared documents are looked up under `<work_dir>/text`.
    pub work_dir: PathBuf,
}

impl TextContext {
    /// Context rooted at `work_dir`.
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }

    /// File holding the prepared document for `name`.
    ///
    /// Only plain names (ASCII alphanumerics, `-`, `_`) map to files.
    pub fn document_path(&self, name: &str) -> Option<PathBuf> {
        let plain = !name.is_empty()
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        plain.then(|| self.work_dir.join("text").join(format!("{name}.svg")))
    }
}

/// One outlined piece of rendered text.
#[derive(Clone, Debug, PartialEq)]
pub struct PathFragment {
    /// SVG path data relative to `offset`.
    pub d: String,
    /// Placement of the fragment.
    pub offset: Point,
}

/// Rendered text: overall view box plus fragments in document order.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedText {
    /// Extent of the source document.
    pub view_box: Rect,
    /// Outlined pieces.
    pub fragments: Vec<PathFragment>,
}

/// Converts content strings into path fragments.
pub trait TextRenderer {
    /// Render `content` using documents reachable through `ctx`.
    fn render(&self, content: &str, ctx: &TextContext) -> VectorResult<RenderedText>;
}

/// Renderer backed by prepared SVG documents.
///
/// Documents registered in memory take precedence; otherwise the content is looked up
/// as a file through [`TextContext::document_path`].
#[derive(Clone, Debug, Default)]
pub struct StaticTextRenderer {
    documents: HashMap<String, String>,
}

impl StaticTextRenderer {
    /// Empty renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the SVG document used for `content`.
    pub fn insert(&mut self, content: impl Into<String>, svg: impl Into<String>) {
        self.documents.insert(content.into(), svg.into());
    }

    /// Builder form of [`StaticTextRenderer::insert`].
    pub fn with(mut self, content: impl Into<String>, svg: impl Into<String>) -> Self {
        self.insert(content, svg);
        self
    }
}

impl TextRenderer for StaticTextRenderer {
    fn render(&self, content: &str, ctx: &TextContext) -> VectorResult<RenderedText> {
        if let Some(svg) = self.documents.get(content) {
            return parse_glyph_document(svg);
        }
        let path = ctx.document_path(content).ok_or_else(|| {
            VectorError::config(format!("no prepared text document for {content:?}"))
        })?;
        let svg = std::fs::read_to_string(&path)
            .with_context(|| format!("read text document '{}'", path.display()))?;
        parse_glyph_document(&svg)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/mod.rs"]
mod tests;
