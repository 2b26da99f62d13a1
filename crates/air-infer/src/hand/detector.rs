use super::types::HandLandmarks;
use crate::InferError;
use air_image::Frame;

/// The hand-tracking capability: find hands in an RGB image.
///
/// Implementations own whatever runtime they need and release it on drop.
pub trait HandDetector {
    /// Detect hands in `image`, which is always in RGB order.
    ///
    /// Returns landmarks normalized to the image, best hand first. An empty
    /// vector means no hand was found.
    fn detect(&mut self, image: &Frame) -> Result<Vec<HandLandmarks>, InferError>;
}

impl<D: HandDetector + ?Sized> HandDetector for Box<D> {
    fn detect(&mut self, image: &Frame) -> Result<Vec<HandLandmarks>, InferError> {
        (**self).detect(image)
    }
}

/// Tuning shared by hand detectors.
#[derive(Debug, Clone, PartialEq)]
pub struct HandTrackerConfig {
    max_hands: usize,
    detection_confidence: f32,
    tracking_confidence: f32,
}

impl Default for HandTrackerConfig {
    fn default() -> Self {
        Self {
            max_hands: 1,
            detection_confidence: 0.7,
            tracking_confidence: 0.5,
        }
    }
}

impl HandTrackerConfig {
    pub fn with_max_hands(mut self, max_hands: usize) -> Self {
        self.max_hands = max_hands;
        self
    }

    /// Presence score needed to report a hand when none was seen last frame.
    pub fn with_detection_confidence(mut self, confidence: f32) -> Self {
        self.detection_confidence = confidence;
        self
    }

    /// Presence score needed to keep reporting a hand seen last frame.
    pub fn with_tracking_confidence(mut self, confidence: f32) -> Self {
        self.tracking_confidence = confidence;
        self
    }

    pub fn max_hands(&self) -> usize {
        self.max_hands
    }

    pub fn detection_confidence(&self) -> f32 {
        self.detection_confidence
    }

    pub fn tracking_confidence(&self) -> f32 {
        self.tracking_confidence
    }
}
