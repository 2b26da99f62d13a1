//! Hand landmarks and the gestures read from them.
//!
//! Landmarks follow the 21-point MediaPipe hand layout. A finger counts as
//! extended when its tip sits above its PIP joint in image space, which only
//! holds for an upright hand.

mod annotate;
mod classifier;
mod detector;
mod gesture;
mod landmarker;
mod preprocess;
mod types;

pub use annotate::{draw_hand_annotations, HAND_CONNECTIONS};
pub use classifier::GestureClassifier;
pub use detector::{HandDetector, HandTrackerConfig};
pub use gesture::{classify, finger_states, interpret, landmark_to_pixel};
pub use landmarker::{HandLandmarker, LANDMARKER_INPUT_SIZE};
pub use preprocess::{preprocess, InputLayout};
pub use types::{
    Finger, FingerStates, Gesture, GestureResult, HandLandmarks, Landmark, LandmarkIndex,
    ParseGestureError, HAND_LANDMARK_COUNT,
};
