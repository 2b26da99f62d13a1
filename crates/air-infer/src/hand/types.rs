use air_base::Vec2;
use std::fmt;
use std::str::FromStr;

/// Number of landmarks in the MediaPipe hand layout
pub const HAND_LANDMARK_COUNT: usize = 21;

/// One tracked point, normalized to the image: x and y in [0, 1] (models may
/// stray slightly outside), z relative depth.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y, z: 0.0 }
    }
}

/// MediaPipe hand landmark indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LandmarkIndex {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl LandmarkIndex {
    pub const ALL: [LandmarkIndex; HAND_LANDMARK_COUNT] = [
        LandmarkIndex::Wrist,
        LandmarkIndex::ThumbCmc,
        LandmarkIndex::ThumbMcp,
        LandmarkIndex::ThumbIp,
        LandmarkIndex::ThumbTip,
        LandmarkIndex::IndexMcp,
        LandmarkIndex::IndexPip,
        LandmarkIndex::IndexDip,
        LandmarkIndex::IndexTip,
        LandmarkIndex::MiddleMcp,
        LandmarkIndex::MiddlePip,
        LandmarkIndex::MiddleDip,
        LandmarkIndex::MiddleTip,
        LandmarkIndex::RingMcp,
        LandmarkIndex::RingPip,
        LandmarkIndex::RingDip,
        LandmarkIndex::RingTip,
        LandmarkIndex::PinkyMcp,
        LandmarkIndex::PinkyPip,
        LandmarkIndex::PinkyDip,
        LandmarkIndex::PinkyTip,
    ];
}

impl From<LandmarkIndex> for usize {
    fn from(index: LandmarkIndex) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for LandmarkIndex {
    type Error = String;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        LandmarkIndex::ALL.get(value).copied().ok_or_else(|| {
            format!(
                "Invalid landmark index: {}. Must be in range 0-{}.",
                value,
                HAND_LANDMARK_COUNT - 1
            )
        })
    }
}

/// All 21 landmarks of one detected hand.
#[derive(Debug, Clone, PartialEq)]
pub struct HandLandmarks {
    pub landmarks: [Landmark; HAND_LANDMARK_COUNT],
    /// Hand presence score reported by the model, in [0, 1].
    pub score: f32,
}

impl HandLandmarks {
    pub fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self {
            landmarks,
            score: 1.0,
        }
    }

    pub fn with_score(mut self, score: f32) -> Self {
        self.score = score;
        self
    }

    pub fn get(&self, index: LandmarkIndex) -> &Landmark {
        &self.landmarks[usize::from(index)]
    }

    pub fn get_mut(&mut self, index: LandmarkIndex) -> &mut Landmark {
        &mut self.landmarks[usize::from(index)]
    }
}

/// The four fingers the gesture heuristic looks at. The thumb is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn tip(self) -> LandmarkIndex {
        match self {
            Finger::Index => LandmarkIndex::IndexTip,
            Finger::Middle => LandmarkIndex::MiddleTip,
            Finger::Ring => LandmarkIndex::RingTip,
            Finger::Pinky => LandmarkIndex::PinkyTip,
        }
    }

    /// The proximal interphalangeal joint the tip is compared against.
    pub fn pip(self) -> LandmarkIndex {
        match self {
            Finger::Index => LandmarkIndex::IndexPip,
            Finger::Middle => LandmarkIndex::MiddlePip,
            Finger::Ring => LandmarkIndex::RingPip,
            Finger::Pinky => LandmarkIndex::PinkyPip,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Finger::Index => "index",
            Finger::Middle => "middle",
            Finger::Ring => "ring",
            Finger::Pinky => "pinky",
        }
    }
}

/// Extended flag per finger. The default has every finger curled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FingerStates {
    pub index: bool,
    pub middle: bool,
    pub ring: bool,
    pub pinky: bool,
}

impl FingerStates {
    pub fn new(index: bool, middle: bool, ring: bool, pinky: bool) -> Self {
        Self {
            index,
            middle,
            ring,
            pinky,
        }
    }

    pub fn get(&self, finger: Finger) -> bool {
        match finger {
            Finger::Index => self.index,
            Finger::Middle => self.middle,
            Finger::Ring => self.ring,
            Finger::Pinky => self.pinky,
        }
    }

    pub fn set(&mut self, finger: Finger, extended: bool) {
        match finger {
            Finger::Index => self.index = extended,
            Finger::Middle => self.middle = extended,
            Finger::Ring => self.ring = extended,
            Finger::Pinky => self.pinky = extended,
        }
    }

    pub fn all_extended(&self) -> bool {
        Finger::ALL.iter().all(|&f| self.get(f))
    }

    pub fn none_extended(&self) -> bool {
        Finger::ALL.iter().all(|&f| !self.get(f))
    }

    /// `(finger, extended)` pairs in index..pinky order.
    pub fn iter(&self) -> impl Iterator<Item = (Finger, bool)> + '_ {
        Finger::ALL.iter().map(move |&f| (f, self.get(f)))
    }
}

/// Gesture read from one frame's finger states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gesture {
    /// All four fingers extended (open palm).
    Clear,
    /// No finger extended. Also what a frame without a hand reads as.
    Fist,
    /// Only the index finger extended.
    Draw,
    Idle,
}

impl Gesture {
    pub fn as_str(self) -> &'static str {
        match self {
            Gesture::Clear => "clear",
            Gesture::Fist => "fist",
            Gesture::Draw => "draw",
            Gesture::Idle => "idle",
        }
    }
}

impl fmt::Display for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseGestureError(pub String);

impl fmt::Display for ParseGestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown gesture '{}'", self.0)
    }
}

impl std::error::Error for ParseGestureError {}

impl FromStr for Gesture {
    type Err = ParseGestureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "clear" => Ok(Gesture::Clear),
            "fist" => Ok(Gesture::Fist),
            "draw" => Ok(Gesture::Draw),
            "idle" => Ok(Gesture::Idle),
            other => Err(ParseGestureError(other.to_string())),
        }
    }
}

/// Everything the classifier reports for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureResult {
    pub gesture: Gesture,
    /// Index fingertip in frame pixels, present only when a hand was found.
    pub cursor: Option<Vec2<i32>>,
    pub landmarks: Option<HandLandmarks>,
    pub finger_states: FingerStates,
}

impl GestureResult {
    /// False for frames without a hand, which still classify as [`Gesture::Fist`].
    pub fn hand_detected(&self) -> bool {
        self.landmarks.is_some()
    }
}
