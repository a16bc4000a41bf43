//! Vectormation is a declarative engine for time-parameterized vector graphics.
//!
//! Every visual property is an [`Attribute`]: a total function of time built by layering
//! edits. Shapes bundle attributes, a [`Scene`] collects shapes, and a frame is the SVG
//! document obtained by evaluating everything at one instant.
//!
//! - Build shapes and animate their attributes
//! - Register them in a [`Scene`]
//! - Serialize frames with [`Scene::frame`] or drive them through a [`Playback`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod foundation;

pub(crate) mod animation;
pub(crate) mod geometry;
pub(crate) mod morph;
/// Shape objects and their shared contract.
pub mod shapes;
/// Scene registry, frame serialization and playback state.
pub mod scene;
pub(crate) mod style;
pub(crate) mod text;

pub use crate::foundation::core::{Affine, Canvas, CubicBez, Point, Rect, Time, Vec2, progress};
pub use crate::foundation::error::{VectorError, VectorResult};

pub use crate::animation::attribute::{Attribute, Span};
pub use crate::animation::ease::Ease;
pub use crate::animation::value::{Additive, AttrValue, Lerp};
pub use crate::geometry::path::{Path, cubics_to_svg_data};
pub use crate::geometry::segment::{ArcSegment, Segment};
pub use crate::morph::{MatchBy, MorphOpts, MorphPlan, SubpathMorph};
pub use crate::scene::{Playback, Scene, SceneConfig, ShapeId};
pub use crate::shapes::{
    Circle, Collection, Line, Lines, MorphObject, PathShape, Polygon, Rectangle, Shape, ShapeExt,
    ShapeKind, ShapeRef, TextObject, Trace,
};
pub use crate::style::color::Color;
pub use crate::style::key::{StyleKey, StyleMap, StyleValue};
pub use crate::style::styling::Styling;
pub use crate::style::transform::TransformClause;
pub use crate::text::{
    PathFragment, RenderedText, StaticTextRenderer, TextContext, TextRenderer,
    parse_glyph_document,
};
