use crate::CameraError;
use air_image::Frame;

/// Async frame source.
#[allow(async_fn_in_trait)]
pub trait Camera {
    /// Receive the next frame.
    ///
    /// Frames are `[height, width, 3]`, tagged with their channel order.
    /// An error means the source cannot produce more frames; callers stop
    /// rather than classify a missing frame.
    async fn recv(&mut self) -> Result<Frame, CameraError>;
}
