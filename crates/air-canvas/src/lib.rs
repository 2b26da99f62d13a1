//! The air-canvas drawing pipeline.
//!
//! A [`CanvasSession`] takes one camera frame at a time, asks a
//! [`GestureClassifier`](air_infer::GestureClassifier) what the hand is
//! doing, extends the stroke on a persistent [`DrawingSurface`] while the
//! index finger alone is raised, and returns the live frame with the
//! drawing blended on top.

pub mod compositor;
pub mod config;
pub mod error;
pub mod session;
pub mod stroke;
pub mod surface;

pub use compositor::{blend, blend_into, export_png};
pub use config::{BlendMode, SessionConfig, StrokeStyle};
pub use error::CanvasError;
pub use session::{CanvasSession, FrameOutput};
pub use stroke::StrokeTracker;
pub use surface::DrawingSurface;
