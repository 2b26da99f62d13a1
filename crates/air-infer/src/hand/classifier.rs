use super::annotate::draw_hand_annotations;
use super::detector::HandDetector;
use super::gesture::interpret;
use super::types::{GestureResult, HandLandmarks};
use crate::InferError;
use air_image::{ChannelOrder, Frame};
use std::borrow::Cow;

/// Turns frames into gestures using a [`HandDetector`].
///
/// The classifier owns the detector for its whole life. The detector, and
/// any model runtime it holds, is released exactly once when the classifier
/// is dropped or [`close`](Self::close)d, including when the owner unwinds
/// after an error.
pub struct GestureClassifier<D: HandDetector> {
    detector: D,
    frames: u64,
}

impl<D: HandDetector> GestureClassifier<D> {
    pub fn new(detector: D) -> Self {
        log::debug!("gesture classifier started");
        Self {
            detector,
            frames: 0,
        }
    }

    /// Classify one frame.
    ///
    /// The frame may be in either channel order; it is converted to RGB
    /// before the detector sees it and is never modified. Only the first
    /// detected hand is used.
    ///
    /// # Errors
    ///
    /// Returns `InferError::UnsupportedInput` for an empty frame and passes
    /// through detector failures.
    pub fn process(&mut self, frame: &Frame) -> Result<GestureResult, InferError> {
        if frame.is_empty() {
            return Err(InferError::UnsupportedInput("empty frame".to_string()));
        }

        let rgb = match frame.order() {
            ChannelOrder::Rgb => Cow::Borrowed(frame),
            ChannelOrder::Bgr => Cow::Owned(frame.to_rgb()),
        };
        let hand = self.detector.detect(&rgb)?.into_iter().next();
        self.frames += 1;

        let result = interpret(hand, frame.width(), frame.height());
        log::trace!(
            "frame {}: {} cursor={:?} fingers={:?}",
            self.frames,
            result.gesture,
            result.cursor,
            result.finger_states
        );
        Ok(result)
    }

    /// Overlay the hand skeleton on `frame` in place. Purely cosmetic.
    pub fn draw_annotations(&self, frame: &mut Frame, landmarks: &HandLandmarks) {
        draw_hand_annotations(frame, landmarks);
    }

    /// Frames classified so far.
    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Release the detector now rather than at end of scope.
    pub fn close(self) {
        drop(self);
    }
}

impl<D: HandDetector> Drop for GestureClassifier<D> {
    fn drop(&mut self) {
        log::info!("releasing hand tracker after {} frames", self.frames);
    }
}
