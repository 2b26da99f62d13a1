use air_base::Vec2;
use air_image::ImageError;
use air_infer::InferError;
use std::fmt;

#[derive(Debug)]
pub enum CanvasError {
    /// A frame with zero width or height.
    EmptyFrame,
    /// A frame whose size differs from the surface fixed by the first frame.
    DimensionMismatch {
        expected: Vec2<usize>,
        got: Vec2<usize>,
    },
    /// Export requested before any frame created the surface.
    NoSurface,
    Infer(InferError),
    Image(ImageError),
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::EmptyFrame => write!(f, "empty frame"),
            CanvasError::DimensionMismatch { expected, got } => {
                write!(f, "frame size {got:?} does not match surface size {expected:?}")
            }
            CanvasError::NoSurface => write!(f, "no drawing surface yet"),
            CanvasError::Infer(err) => write!(f, "inference error: {err}"),
            CanvasError::Image(err) => write!(f, "image error: {err}"),
        }
    }
}

impl std::error::Error for CanvasError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CanvasError::Infer(err) => Some(err),
            CanvasError::Image(err) => Some(err),
            _ => None,
        }
    }
}

impl From<InferError> for CanvasError {
    fn from(err: InferError) -> Self {
        CanvasError::Infer(err)
    }
}

impl From<ImageError> for CanvasError {
    fn from(err: ImageError) -> Self {
        CanvasError::Image(err)
    }
}
