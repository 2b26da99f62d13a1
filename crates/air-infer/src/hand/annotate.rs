use super::gesture::landmark_to_pixel;
use super::types::{HandLandmarks, LandmarkIndex};
use air_image::{draw_filled_circle, draw_thick_line, Frame, Rgb};

use LandmarkIndex::*;

/// Bones of the hand skeleton, as landmark pairs.
pub const HAND_CONNECTIONS: [(LandmarkIndex, LandmarkIndex); 21] = [
    // Palm
    (Wrist, ThumbCmc),
    (Wrist, IndexMcp),
    (IndexMcp, MiddleMcp),
    (MiddleMcp, RingMcp),
    (RingMcp, PinkyMcp),
    (Wrist, PinkyMcp),
    // Thumb
    (ThumbCmc, ThumbMcp),
    (ThumbMcp, ThumbIp),
    (ThumbIp, ThumbTip),
    // Index
    (IndexMcp, IndexPip),
    (IndexPip, IndexDip),
    (IndexDip, IndexTip),
    // Middle
    (MiddleMcp, MiddlePip),
    (MiddlePip, MiddleDip),
    (MiddleDip, MiddleTip),
    // Ring
    (RingMcp, RingPip),
    (RingPip, RingDip),
    (RingDip, RingTip),
    // Pinky
    (PinkyMcp, PinkyPip),
    (PinkyPip, PinkyDip),
    (PinkyDip, PinkyTip),
];

const CONNECTION_COLOR: Rgb = [224, 224, 224];
const CONNECTION_THICKNESS: u32 = 2;
const LANDMARK_COLOR: Rgb = [255, 48, 48];
const LANDMARK_RADIUS: i32 = 4;

/// Draw the hand skeleton (bones, then joints) onto `frame` in place.
pub fn draw_hand_annotations(frame: &mut Frame, hand: &HandLandmarks) {
    let (w, h) = (frame.width(), frame.height());
    let px = |index: LandmarkIndex| landmark_to_pixel(hand.get(index), w, h);

    for (a, b) in HAND_CONNECTIONS {
        draw_thick_line(frame, px(a), px(b), CONNECTION_COLOR, CONNECTION_THICKNESS);
    }
    for index in LandmarkIndex::ALL {
        draw_filled_circle(frame, px(index), LANDMARK_RADIUS, LANDMARK_COLOR);
    }
}
