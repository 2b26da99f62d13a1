use air_infer::{
    Finger, FingerStates, Gesture, LandmarkIndex, ParseGestureError, HAND_CONNECTIONS,
    HAND_LANDMARK_COUNT,
};
use std::collections::HashSet;

#[test]
fn test_hand_landmark_count() {
    assert_eq!(HAND_LANDMARK_COUNT, 21);
    assert_eq!(LandmarkIndex::ALL.len(), 21);
}

#[test]
fn test_landmark_index_values() {
    assert_eq!(usize::from(LandmarkIndex::Wrist), 0);
    assert_eq!(usize::from(LandmarkIndex::ThumbTip), 4);
    assert_eq!(usize::from(LandmarkIndex::IndexPip), 6);
    assert_eq!(usize::from(LandmarkIndex::IndexTip), 8);
    assert_eq!(usize::from(LandmarkIndex::MiddleTip), 12);
    assert_eq!(usize::from(LandmarkIndex::RingTip), 16);
    assert_eq!(usize::from(LandmarkIndex::PinkyTip), 20);

    for (i, index) in LandmarkIndex::ALL.into_iter().enumerate() {
        assert_eq!(usize::from(index), i);
        assert_eq!(LandmarkIndex::try_from(i), Ok(index));
    }
}

#[test]
fn test_landmark_index_out_of_range() {
    assert!(LandmarkIndex::try_from(21).is_err());
}

#[test]
fn test_finger_joints() {
    assert_eq!(Finger::Index.tip(), LandmarkIndex::IndexTip);
    assert_eq!(Finger::Index.pip(), LandmarkIndex::IndexPip);
    assert_eq!(Finger::Middle.pip(), LandmarkIndex::MiddlePip);
    assert_eq!(Finger::Ring.tip(), LandmarkIndex::RingTip);
    assert_eq!(Finger::Pinky.pip(), LandmarkIndex::PinkyPip);
}

#[test]
fn test_finger_states_set_and_get() {
    let mut states = FingerStates::default();
    assert!(states.none_extended());

    states.set(Finger::Ring, true);
    assert!(states.get(Finger::Ring));
    assert!(!states.get(Finger::Index));
    assert!(!states.none_extended());
    assert!(!states.all_extended());

    let extended: Vec<Finger> = states.iter().filter(|&(_, e)| e).map(|(f, _)| f).collect();
    assert_eq!(extended, vec![Finger::Ring]);
}

#[test]
fn test_gesture_names_round_trip() {
    for gesture in [Gesture::Clear, Gesture::Fist, Gesture::Draw, Gesture::Idle] {
        assert_eq!(gesture.to_string(), gesture.as_str());
        assert_eq!(gesture.as_str().parse::<Gesture>(), Ok(gesture));
    }
    assert_eq!(Gesture::Draw.to_string(), "draw");
}

#[test]
fn test_gesture_parse_error() {
    let err = "wave".parse::<Gesture>().unwrap_err();
    assert_eq!(err, ParseGestureError("wave".to_string()));
    assert!(err.to_string().contains("wave"));
}

#[test]
fn test_hand_connections_are_distinct_bones() {
    let bones: HashSet<(usize, usize)> = HAND_CONNECTIONS
        .iter()
        .map(|&(a, b)| {
            let (a, b) = (usize::from(a), usize::from(b));
            (a.min(b), a.max(b))
        })
        .collect();
    assert_eq!(bones.len(), 21);
    assert!(bones.contains(&(0, 1)));
    assert!(bones.contains(&(7, 8)));
    assert!(bones.contains(&(0, 17)));
    assert!(bones.contains(&(19, 20)));
}
