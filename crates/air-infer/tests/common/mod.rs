// Shared by the hand tests through `mod common;`.
#![allow(dead_code)]

use air_infer::{Finger, HandLandmarks, Landmark, HAND_LANDMARK_COUNT};

/// A hand with every landmark at the center and each finger's tip placed
/// above (extended) or below (curled) its PIP joint.
pub fn hand_with(index: bool, middle: bool, ring: bool, pinky: bool) -> HandLandmarks {
    let mut hand = HandLandmarks::new([Landmark::new(0.5, 0.5); HAND_LANDMARK_COUNT]);
    let flags = [index, middle, ring, pinky];
    for (finger, extended) in Finger::ALL.into_iter().zip(flags) {
        hand.get_mut(finger.pip()).y = 0.5;
        hand.get_mut(finger.tip()).y = if extended { 0.3 } else { 0.7 };
    }
    hand
}
