use super::detector::{HandDetector, HandTrackerConfig};
use super::preprocess::{preprocess, InputLayout};
use super::types::{HandLandmarks, Landmark, HAND_LANDMARK_COUNT};
use crate::{Backend, InferError, ModelSource, Session};
use air_base::Tensor;
use air_image::Frame;
use std::collections::HashMap;

/// Side of the square input the MediaPipe landmark model takes
pub const LANDMARKER_INPUT_SIZE: usize = 224;

const LANDMARK_VALUES: usize = HAND_LANDMARK_COUNT * 3;

/// Single-hand landmark model run over the whole frame.
///
/// Expects a MediaPipe-style hand landmark network: one image input, one
/// output of 63 values (x, y, z per landmark, in input pixels) and one
/// single-value hand presence output. Presence is gated by the detection
/// confidence until a hand is found, then by the tracking confidence while
/// it stays in view.
pub struct HandLandmarker {
    session: Box<dyn Session>,
    config: HandTrackerConfig,
    layout: InputLayout,
    input_size: usize,
    tracking: bool,
}

impl HandLandmarker {
    /// Load the landmark model through `backend`.
    ///
    /// # Errors
    ///
    /// Fails if the backend cannot load the model; the session cannot run
    /// without it.
    pub fn new(model: ModelSource, backend: &dyn Backend) -> Result<Self, InferError> {
        let description = model.describe();
        let session = backend.load_model(model)?;
        log::info!("hand landmarker ready ({} via {})", description, backend.name());
        Ok(Self::from_session(session))
    }

    /// Wrap an already loaded session.
    pub fn from_session(session: Box<dyn Session>) -> Self {
        Self {
            session,
            config: HandTrackerConfig::default(),
            layout: InputLayout::Nchw,
            input_size: LANDMARKER_INPUT_SIZE,
            tracking: false,
        }
    }

    pub fn with_config(mut self, config: HandTrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_layout(mut self, layout: InputLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_input_size(mut self, input_size: usize) -> Self {
        self.input_size = input_size;
        self
    }

    pub fn config(&self) -> &HandTrackerConfig {
        &self.config
    }

    /// Whether a hand was reported on the previous frame.
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    fn threshold(&self) -> f32 {
        if self.tracking {
            self.config.tracking_confidence()
        } else {
            self.config.detection_confidence()
        }
    }

    /// First output, in model order, that satisfies `pred`.
    fn find_output<'a>(
        &self,
        outputs: &'a HashMap<String, Tensor<f32>>,
        pred: impl Fn(&str, &Tensor<f32>) -> bool,
    ) -> Option<&'a Tensor<f32>> {
        self.session
            .output_names()
            .iter()
            .filter_map(|name| outputs.get(name).map(|t| (name.as_str(), t)))
            .find(|&(name, t)| pred(name, t))
            .map(|(_, t)| t)
    }

    fn decode(
        &self,
        outputs: &HashMap<String, Tensor<f32>>,
    ) -> Result<(HandLandmarks, f32), InferError> {
        let coords = self
            .find_output(outputs, |_, t| t.len() == LANDMARK_VALUES)
            .ok_or_else(|| InferError::ShapeMismatch {
                expected: format!("an output with {} values", LANDMARK_VALUES),
                got: format!(
                    "{:?}",
                    outputs.iter().map(|(k, v)| (k, &v.shape)).collect::<Vec<_>>()
                ),
            })?;

        let presence = self
            .find_output(outputs, |name, t| {
                t.len() == 1 && (name.contains("score") || name.contains("flag"))
            })
            .or_else(|| self.find_output(outputs, |_, t| t.len() == 1));
        let score = presence.map(|t| to_probability(t.data[0])).unwrap_or(1.0);

        let size = self.input_size as f32;
        let mut landmarks = [Landmark::default(); HAND_LANDMARK_COUNT];
        for (i, lm) in landmarks.iter_mut().enumerate() {
            lm.x = coords.data[i * 3] / size;
            lm.y = coords.data[i * 3 + 1] / size;
            lm.z = coords.data[i * 3 + 2] / size;
        }

        Ok((HandLandmarks::new(landmarks).with_score(score), score))
    }
}

/// Presence outputs are either probabilities or raw logits.
fn to_probability(value: f32) -> f32 {
    if (0.0..=1.0).contains(&value) {
        value
    } else {
        1.0 / (1.0 + (-value).exp())
    }
}

impl HandDetector for HandLandmarker {
    fn detect(&mut self, image: &Frame) -> Result<Vec<HandLandmarks>, InferError> {
        if self.config.max_hands() == 0 {
            return Ok(Vec::new());
        }

        let input = preprocess(image, self.input_size, self.layout)?;
        let input_name = self
            .session
            .input_names()
            .first()
            .ok_or_else(|| InferError::BackendError("model has no inputs".to_string()))?
            .clone();

        let outputs = self.session.run(&[(input_name.as_str(), input)])?;
        let (hand, score) = self.decode(&outputs)?;

        let threshold = self.threshold();
        if score < threshold {
            if self.tracking {
                log::debug!("hand lost (score {:.2} < {:.2})", score, threshold);
            }
            self.tracking = false;
            return Ok(Vec::new());
        }

        if !self.tracking {
            log::debug!("hand found (score {:.2})", score);
        }
        self.tracking = true;
        Ok(vec![hand])
    }
}
