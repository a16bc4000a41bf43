//! Scene registry and frame serialization.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Canvas, Point, Rect, Time};
use crate::shapes::rect::Rectangle;
use crate::shapes::{Shape, ShapeRef, latest, visible_by_z};
use crate::style::key::{StyleKey, StyleMap};
use crate::text::TextContext;

pub(crate) mod playback;

pub use playback::Playback;

/// Scene-wide settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Output canvas.
    pub canvas: Canvas,
    /// Working directory for prepared text documents.
    pub text_dir: PathBuf,
}

/// Registry key of a top-level shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShapeId(u64);

/// Top-level shapes plus the canvas they are drawn on.
///
/// Shapes are kept in insertion order, which also breaks ties in draw order.
#[derive(Debug)]
pub struct Scene {
    config: SceneConfig,
    shapes: BTreeMap<ShapeId, ShapeRef>,
    next_id: u64,
    background: Option<ShapeId>,
}

impl Scene {
    /// Empty scene.
    pub fn new(config: SceneConfig) -> Self {
        Self {
            config,
            shapes: BTreeMap::new(),
            next_id: 0,
            background: None,
        }
    }

    /// Scene settings.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Output canvas.
    pub fn canvas(&self) -> Canvas {
        self.config.canvas
    }

    /// Context handed to text renderers.
    pub fn text_context(&self) -> TextContext {
        TextContext::new(self.config.text_dir.clone())
    }

    /// Register a shape.
    pub fn add<S: Shape + 'static>(&mut self, shape: S) -> ShapeId {
        self.add_shared(Rc::new(shape))
    }

    /// Register an already shared shape.
    pub fn add_shared(&mut self, shape: ShapeRef) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        self.shapes.insert(id, shape);
        id
    }

    /// Unregister a shape.
    pub fn remove(&mut self, id: ShapeId) -> Option<ShapeRef> {
        if self.background == Some(id) {
            self.background = None;
        }
        self.shapes.remove(&id)
    }

    /// Registered shape.
    pub fn get(&self, id: ShapeId) -> Option<&ShapeRef> {
        self.shapes.get(&id)
    }

    /// Number of registered shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Full-canvas rectangle drawn at `z`; replaces any previous background.
    ///
    /// Without a `fill` override the background is black.
    pub fn set_background(&mut self, creation: Time, z: f64, styles: &StyleMap) -> ShapeId {
        if let Some(old) = self.background.take() {
            self.shapes.remove(&old);
        }
        let canvas = self.config.canvas;
        let rect = Rectangle::with_defaults(
            canvas.width,
            canvas.height,
            Point::ZERO,
            creation,
            styles,
            &StyleMap::preset([(StyleKey::StrokeWidth, 0.0.into())]),
        );
        rect.z.set_from(creation, z);
        let id = self.add(rect);
        self.background = Some(id);
        id
    }

    /// Time after which no registered shape changes (never negative).
    pub fn duration(&self) -> Time {
        latest(self.shapes.values().map(|s| s.last_change())).max(0.0)
    }

    /// SVG document for `time` over the full canvas.
    pub fn frame(&self, time: Time) -> String {
        self.frame_in(time, self.config.canvas.view_box())
    }

    /// SVG document for `time` restricted to `view_box`.
    #[tracing::instrument(skip(self), fields(shapes = self.shapes.len()))]
    pub fn frame_in(&self, time: Time, view_box: Rect) -> String {
        let canvas = self.config.canvas;
        let mut out = String::from("<?xml version='1.0' encoding='UTF-8'?>\n");
        out.push_str(&format!(
            "<svg version='1.1' xmlns='http://www.w3.org/2000/svg' \
             xmlns:xlink='http://www.w3.org/1999/xlink' width='{}' height='{}' \
             viewBox='{} {} {} {}'>\n",
            canvas.width,
            canvas.height,
            view_box.x0,
            view_box.y0,
            view_box.width(),
            view_box.height()
        ));
        let visible = visible_by_z(self.shapes.values(), time);
        for shape in &visible {
            let markup = shape.to_markup(time);
            if !markup.is_empty() {
                out.push_str(&markup);
                out.push('\n');
            }
        }
        out.push_str("</svg>");
        tracing::debug!(visible = visible.len(), "frame serialized");
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/mod.rs"]
mod tests;
