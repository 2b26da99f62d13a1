use super::types::{Finger, FingerStates, Gesture, GestureResult, HandLandmarks, Landmark, LandmarkIndex};
use air_base::Vec2;

/// Extended flags for the four tracked fingers.
///
/// A finger is extended when its tip's y is strictly less than its PIP
/// joint's y (image y grows downward).
pub fn finger_states(hand: &HandLandmarks) -> FingerStates {
    let mut states = FingerStates::default();
    for finger in Finger::ALL {
        let tip = hand.get(finger.tip());
        let pip = hand.get(finger.pip());
        states.set(finger, tip.y < pip.y);
    }
    states
}

/// Map finger states to a gesture. First match wins:
/// all extended → clear, none → fist, only index → draw, otherwise idle.
pub fn classify(states: &FingerStates) -> Gesture {
    if states.all_extended() {
        Gesture::Clear
    } else if states.none_extended() {
        Gesture::Fist
    } else if states.index && !states.middle && !states.ring && !states.pinky {
        Gesture::Draw
    } else {
        Gesture::Idle
    }
}

/// Scale a normalized landmark to pixel coordinates, truncating toward zero.
pub fn landmark_to_pixel(landmark: &Landmark, width: usize, height: usize) -> Vec2<i32> {
    Vec2::new(
        (landmark.x * width as f32) as i32,
        (landmark.y * height as f32) as i32,
    )
}

/// Build the per-frame result from the first detected hand, if any.
///
/// Without a hand every finger reads as curled, so the gesture is
/// [`Gesture::Fist`] and the cursor is `None`.
pub fn interpret(hand: Option<HandLandmarks>, width: usize, height: usize) -> GestureResult {
    match hand {
        Some(hand) => {
            let finger_states = finger_states(&hand);
            GestureResult {
                gesture: classify(&finger_states),
                cursor: Some(landmark_to_pixel(
                    hand.get(LandmarkIndex::IndexTip),
                    width,
                    height,
                )),
                landmarks: Some(hand),
                finger_states,
            }
        }
        None => {
            let finger_states = FingerStates::default();
            GestureResult {
                gesture: classify(&finger_states),
                cursor: None,
                landmarks: None,
                finger_states,
            }
        }
    }
}
