use air_base::Vec2;
use air_infer::{Gesture, GestureResult};

/// Chains consecutive draw frames into one continuous stroke.
///
/// Any frame that is not a draw gesture with a cursor ends the stroke, so
/// the next draw frame starts a new one instead of joining the old end.
#[derive(Debug, Clone, Default)]
pub struct StrokeTracker {
    previous: Option<Vec2<i32>>,
}

impl StrokeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one frame, returning the segment to draw, if any.
    ///
    /// The first point of a stroke yields a zero-length segment so a single
    /// draw frame still leaves a dot.
    pub fn advance(
        &mut self,
        gesture: Gesture,
        cursor: Option<Vec2<i32>>,
    ) -> Option<(Vec2<i32>, Vec2<i32>)> {
        match (gesture, cursor) {
            (Gesture::Draw, Some(point)) => {
                let from = self.previous.unwrap_or(point);
                self.previous = Some(point);
                Some((from, point))
            }
            _ => {
                self.previous = None;
                None
            }
        }
    }

    pub fn update(&mut self, result: &GestureResult) -> Option<(Vec2<i32>, Vec2<i32>)> {
        self.advance(result.gesture, result.cursor)
    }

    /// End the current stroke.
    pub fn reset(&mut self) {
        self.previous = None;
    }

    /// Last point of the stroke in progress.
    pub fn previous(&self) -> Option<Vec2<i32>> {
        self.previous
    }
}
