use crate::{blend_into, CanvasError, DrawingSurface, SessionConfig, StrokeTracker};
use air_image::Frame;
use air_infer::{Gesture, GestureClassifier, GestureResult, HandDetector};
use std::path::Path;

/// What one pipeline step produces.
#[derive(Debug, Clone)]
pub struct FrameOutput {
    pub result: GestureResult,
    /// The live frame with the drawing blended over it, ready for display.
    pub composite: Frame,
}

/// One drawing session: the classifier, the stroke state and the surface.
///
/// The surface is created from the first frame and every later frame must
/// have the same size. Dropping the session releases the hand tracker.
pub struct CanvasSession<D: HandDetector> {
    classifier: GestureClassifier<D>,
    config: SessionConfig,
    surface: Option<DrawingSurface>,
    strokes: StrokeTracker,
}

impl<D: HandDetector> CanvasSession<D> {
    pub fn new(detector: D, config: SessionConfig) -> Self {
        Self {
            classifier: GestureClassifier::new(detector),
            config,
            surface: None,
            strokes: StrokeTracker::new(),
        }
    }

    /// Run the pipeline on one captured frame.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::EmptyFrame` for a zero-sized frame,
    /// `CanvasError::DimensionMismatch` if the frame size changed since the
    /// first frame, and passes classifier errors through.
    pub fn step(&mut self, mut frame: Frame) -> Result<FrameOutput, CanvasError> {
        if frame.width() == 0 || frame.height() == 0 {
            return Err(CanvasError::EmptyFrame);
        }

        let surface = match &mut self.surface {
            Some(surface) => {
                if surface.size() != frame.size() {
                    return Err(CanvasError::DimensionMismatch {
                        expected: surface.size(),
                        got: frame.size(),
                    });
                }
                surface
            }
            slot @ None => {
                let surface = DrawingSurface::new(frame.width(), frame.height())?
                    .with_style(*self.config.stroke());
                log::info!("drawing surface {}x{}", surface.width(), surface.height());
                slot.insert(surface)
            }
        };

        if self.config.mirror() {
            frame.mirror_horizontal();
        }

        let result = match self.classifier.process(&frame) {
            Ok(result) => result,
            Err(e) => {
                self.strokes.reset();
                return Err(e.into());
            }
        };

        if result.gesture == Gesture::Clear && self.config.clear_on_gesture() {
            if !surface.is_blank() {
                log::info!("clear gesture, wiping drawing");
            }
            surface.clear();
        }
        if let Some((from, to)) = self.strokes.update(&result) {
            surface.draw_line(from, to);
        }

        if self.config.annotate() {
            if let Some(hand) = &result.landmarks {
                self.classifier.draw_annotations(&mut frame, hand);
            }
        }
        blend_into(&mut frame, surface.image(), self.config.blend())?;

        Ok(FrameOutput {
            result,
            composite: frame,
        })
    }

    /// Save the strokes drawn so far as PNG.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::NoSurface` before the first frame, or the
    /// underlying write error.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        self.surface
            .as_ref()
            .ok_or(CanvasError::NoSurface)?
            .export_png(path)
    }

    /// End the stroke in progress without touching the drawing.
    ///
    /// Call this when frames stop flowing through [`step`](Self::step), for
    /// example while paused, so the next draw frame starts a new stroke.
    pub fn end_stroke(&mut self) {
        self.strokes.reset();
    }

    /// Wipe the drawing and end any stroke in progress.
    pub fn clear(&mut self) {
        if let Some(surface) = &mut self.surface {
            surface.clear();
        }
        self.strokes.reset();
        log::info!("drawing cleared");
    }

    /// Turn landmark annotation on or off for later frames.
    pub fn set_annotate(&mut self, annotate: bool) {
        self.config = self.config.clone().with_annotate(annotate);
    }

    pub fn surface(&self) -> Option<&DrawingSurface> {
        self.surface.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn classifier(&self) -> &GestureClassifier<D> {
        &self.classifier
    }

    /// End the session now, releasing the hand tracker.
    pub fn close(self) {
        log::debug!(
            "closing session after {} frames",
            self.classifier.frames_processed()
        );
    }
}
