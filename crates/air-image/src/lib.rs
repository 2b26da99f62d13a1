//! Frames, raster drawing and image file codecs for air-canvas.
//!
//! Every frame is 8-bit, three channels, HWC layout `[height, width, 3]`,
//! tagged with its channel order. Drawing primitives take colors as RGB and
//! write them in whatever order the target frame uses.

pub mod codec;
pub mod draw;
pub mod error;
pub mod frame;

pub use codec::{decode_frame, encode_png, save_png, Alpha};
pub use draw::{draw_filled_circle, draw_line, draw_thick_line};
pub use error::ImageError;
pub use frame::{ChannelOrder, Frame, Rgb};
