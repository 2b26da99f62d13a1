//! Frame sources for air-canvas.
//!
//! The `Camera` trait hands out one [`Frame`](air_image::Frame) per call.
//! `ReplayCamera` plays back fixed frames; `V4l2Camera` (feature `v4l2`)
//! reads a webcam.

pub mod config;
pub mod convert;
pub mod error;
pub mod replay;
pub mod traits;

#[cfg(feature = "v4l2")]
pub mod v4l2;

pub use config::CameraConfig;
pub use error::CameraError;
pub use replay::ReplayCamera;
pub use traits::Camera;

#[cfg(feature = "v4l2")]
pub use v4l2::V4l2Camera;
