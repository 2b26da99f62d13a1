use crate::{Camera, CameraError};
use air_image::Frame;

/// Plays back a fixed list of frames.
///
/// Useful as a fixture source: tests and offline runs feed the pipeline
/// exactly the frames they choose.
#[derive(Debug, Clone)]
pub struct ReplayCamera {
    frames: Vec<Frame>,
    next: usize,
    looping: bool,
}

impl ReplayCamera {
    /// Play `frames` once, then report [`CameraError::Ended`].
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames,
            next: 0,
            looping: false,
        }
    }

    /// Start over after the last frame instead of ending.
    pub fn looping(mut self) -> Self {
        self.looping = true;
        self
    }

    /// Frames handed out so far, counting repeats.
    pub fn position(&self) -> usize {
        self.next
    }
}

impl Camera for ReplayCamera {
    async fn recv(&mut self) -> Result<Frame, CameraError> {
        if self.frames.is_empty() {
            return Err(CameraError::Ended);
        }
        let index = if self.looping {
            self.next % self.frames.len()
        } else {
            self.next
        };
        let frame = self.frames.get(index).cloned().ok_or(CameraError::Ended)?;
        self.next += 1;
        Ok(frame)
    }
}
