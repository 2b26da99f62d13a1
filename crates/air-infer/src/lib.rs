pub mod backend;
pub mod backendregistry;
pub mod backends;
pub mod device;
pub mod error;
pub mod hand;
pub mod modelsource;
pub mod session;

pub use backend::Backend;
pub use backendregistry::{create_registry, BackendRegistry};
pub use device::Device;
pub use error::InferError;
pub use modelsource::ModelSource;
pub use session::Session;

pub use hand::{
    classify, draw_hand_annotations, finger_states, interpret, landmark_to_pixel, preprocess,
    Finger, FingerStates, Gesture, GestureClassifier, GestureResult, HandDetector,
    HandLandmarker, HandLandmarks, HandTrackerConfig, InputLayout, Landmark, LandmarkIndex,
    ParseGestureError, HAND_CONNECTIONS, HAND_LANDMARK_COUNT, LANDMARKER_INPUT_SIZE,
};

#[cfg(feature = "onnx")]
pub use backends::OnnxBackend;
