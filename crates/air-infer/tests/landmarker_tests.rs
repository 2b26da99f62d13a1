use air_base::Tensor;
use air_image::{ChannelOrder, Frame};
use air_infer::{
    Backend, HandDetector, HandLandmarker, HandTrackerConfig, InferError, InputLayout,
    LandmarkIndex, ModelSource, Session, LANDMARKER_INPUT_SIZE,
};
use std::cell::RefCell;
use std::collections::{HashMap, VecDeque};
use std::rc::Rc;

/// Replays a queue of presence scores, recording the inputs it was given.
struct FakeSession {
    inputs: Vec<String>,
    outputs: Vec<String>,
    coords: Vec<f32>,
    scores: VecDeque<f32>,
    seen: Rc<RefCell<Vec<(String, Vec<usize>)>>>,
}

impl FakeSession {
    fn new(scores: &[f32], seen: Rc<RefCell<Vec<(String, Vec<usize>)>>>) -> Self {
        // index fingertip at the center-top of the input, everything else at the center
        let size = LANDMARKER_INPUT_SIZE as f32;
        let mut coords = vec![size / 2.0; 63];
        let tip = usize::from(LandmarkIndex::IndexTip) * 3;
        coords[tip + 1] = size / 4.0;
        Self {
            inputs: vec!["input_1".to_string()],
            outputs: vec![
                "xyz_x21".to_string(),
                "hand_score".to_string(),
                "lefthand_0_or_righthand_1".to_string(),
            ],
            coords,
            scores: scores.iter().copied().collect(),
            seen,
        }
    }
}

impl Session for FakeSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        for (name, tensor) in inputs {
            self.seen
                .borrow_mut()
                .push((name.to_string(), tensor.shape.clone()));
        }
        let score = self
            .scores
            .pop_front()
            .ok_or_else(|| InferError::BackendError("no more scores".to_string()))?;

        let mut out = HashMap::new();
        out.insert(
            "xyz_x21".to_string(),
            Tensor::new(vec![1, 63], self.coords.clone())?,
        );
        out.insert("hand_score".to_string(), Tensor::new(vec![1, 1], vec![score])?);
        // single-value but not presence; must not be read as the score
        out.insert(
            "lefthand_0_or_righthand_1".to_string(),
            Tensor::new(vec![1, 1], vec![0.0])?,
        );
        Ok(out)
    }

    fn input_names(&self) -> &[String] {
        &self.inputs
    }

    fn output_names(&self) -> &[String] {
        &self.outputs
    }
}

fn landmarker(scores: &[f32]) -> (HandLandmarker, Rc<RefCell<Vec<(String, Vec<usize>)>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let session = FakeSession::new(scores, seen.clone());
    (HandLandmarker::from_session(Box::new(session)), seen)
}

fn rgb_frame() -> Frame {
    Frame::blank(640, 480, ChannelOrder::Rgb).unwrap()
}

#[test]
fn test_detect_scales_landmarks_to_unit_range() {
    let (mut landmarker, _) = landmarker(&[0.9]);
    let hands = landmarker.detect(&rgb_frame()).unwrap();

    assert_eq!(hands.len(), 1);
    let tip = hands[0].get(LandmarkIndex::IndexTip);
    assert!((tip.x - 0.5).abs() < 1e-6);
    assert!((tip.y - 0.25).abs() < 1e-6);
    assert!((hands[0].score - 0.9).abs() < 1e-6);
}

#[test]
fn test_detect_feeds_first_input_in_nchw() {
    let (mut landmarker, seen) = landmarker(&[0.9]);
    landmarker.detect(&rgb_frame()).unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0, "input_1");
    assert_eq!(seen[0].1, vec![1, 3, 224, 224]);
}

#[test]
fn test_detect_nhwc_layout() {
    let (landmarker, seen) = landmarker(&[0.9]);
    let mut landmarker = landmarker.with_layout(InputLayout::Nhwc);
    landmarker.detect(&rgb_frame()).unwrap();
    assert_eq!(seen.borrow()[0].1, vec![1, 224, 224, 3]);
}

#[test]
fn test_low_score_reports_no_hand() {
    let (mut landmarker, _) = landmarker(&[0.6]);
    let hands = landmarker.detect(&rgb_frame()).unwrap();
    assert!(hands.is_empty());
    assert!(!landmarker.is_tracking());
}

#[test]
fn test_tracking_uses_lower_threshold() {
    let (mut landmarker, _) = landmarker(&[0.6, 0.8, 0.6, 0.4, 0.6]);
    let frame = rgb_frame();

    // 0.6 is below detection confidence 0.7
    assert!(landmarker.detect(&frame).unwrap().is_empty());
    assert_eq!(landmarker.detect(&frame).unwrap().len(), 1);
    assert!(landmarker.is_tracking());
    // while tracking, 0.6 clears tracking confidence 0.5
    assert_eq!(landmarker.detect(&frame).unwrap().len(), 1);
    assert!(landmarker.detect(&frame).unwrap().is_empty());
    assert!(!landmarker.is_tracking());
    assert!(landmarker.detect(&frame).unwrap().is_empty());
}

#[test]
fn test_logit_score_is_squashed() {
    let (mut landmarker, _) = landmarker(&[3.0]);
    let hands = landmarker.detect(&rgb_frame()).unwrap();
    assert_eq!(hands.len(), 1);
    assert!(hands[0].score > 0.9 && hands[0].score < 1.0);
}

#[test]
fn test_custom_detection_confidence() {
    let (landmarker, _) = landmarker(&[0.6]);
    let mut landmarker =
        landmarker.with_config(HandTrackerConfig::default().with_detection_confidence(0.5));
    assert_eq!(landmarker.detect(&rgb_frame()).unwrap().len(), 1);
}

#[test]
fn test_zero_max_hands_skips_model() {
    let (landmarker, seen) = landmarker(&[]);
    let mut landmarker = landmarker.with_config(HandTrackerConfig::default().with_max_hands(0));
    assert!(landmarker.detect(&rgb_frame()).unwrap().is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_bgr_frame_rejected() {
    let (mut landmarker, _) = landmarker(&[0.9]);
    let frame = Frame::blank(64, 48, ChannelOrder::Bgr).unwrap();
    let err = landmarker.detect(&frame).unwrap_err();
    assert!(matches!(err, InferError::UnsupportedInput(_)));
}

#[test]
fn test_session_error_propagates() {
    let (mut landmarker, _) = landmarker(&[]);
    let err = landmarker.detect(&rgb_frame()).unwrap_err();
    assert!(matches!(err, InferError::BackendError(_)));
}

/// Model with no 63-value output.
struct ScoreOnlySession {
    names: Vec<String>,
}

impl Session for ScoreOnlySession {
    fn run(
        &mut self,
        _inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        let mut out = HashMap::new();
        out.insert("hand_score".to_string(), Tensor::new(vec![1], vec![0.9])?);
        Ok(out)
    }

    fn input_names(&self) -> &[String] {
        &self.names
    }

    fn output_names(&self) -> &[String] {
        &self.names
    }
}

#[test]
fn test_missing_landmark_output_is_shape_mismatch() {
    let session = ScoreOnlySession {
        names: vec!["hand_score".to_string()],
    };
    let mut landmarker = HandLandmarker::from_session(Box::new(session));
    let err = landmarker.detect(&rgb_frame()).unwrap_err();
    assert!(matches!(err, InferError::ShapeMismatch { .. }));
}

struct FailingBackend;

impl Backend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        Err(InferError::ModelLoad(format!("cannot open {}", model.describe())))
    }
}

#[test]
fn test_model_load_failure_is_fatal() {
    let result = HandLandmarker::new(ModelSource::File("missing.onnx".into()), &FailingBackend);
    match result {
        Err(InferError::ModelLoad(msg)) => assert!(msg.contains("missing.onnx")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected model load failure"),
    }
}
