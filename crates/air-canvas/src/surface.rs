use crate::{compositor, CanvasError, StrokeStyle};
use air_base::Vec2;
use air_image::{draw_thick_line, ChannelOrder, Frame};
use std::path::Path;

/// The persistent canvas strokes accumulate on.
///
/// Its size is fixed at construction. Pixels that were never drawn stay
/// all-zero, which is what the compositor and PNG export treat as empty.
#[derive(Debug, Clone)]
pub struct DrawingSurface {
    image: Frame,
    style: StrokeStyle,
}

impl DrawingSurface {
    /// A blank surface using the default stroke style.
    ///
    /// # Errors
    ///
    /// Returns `CanvasError::EmptyFrame` if either dimension is zero.
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        if width == 0 || height == 0 {
            return Err(CanvasError::EmptyFrame);
        }
        let image = Frame::blank(width, height, ChannelOrder::Rgb)?;
        Ok(Self {
            image,
            style: StrokeStyle::default(),
        })
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Draw one stroke segment. Parts outside the surface are clipped.
    pub fn draw_line(&mut self, from: Vec2<i32>, to: Vec2<i32>) {
        draw_thick_line(
            &mut self.image,
            from,
            to,
            self.style.color(),
            self.style.thickness(),
        );
    }

    /// Borrow the current contents.
    pub fn image(&self) -> &Frame {
        &self.image
    }

    /// Owned copy of the current contents.
    pub fn snapshot(&self) -> Frame {
        self.image.clone()
    }

    pub fn clear(&mut self) {
        self.image.data_mut().fill(0);
    }

    pub fn is_blank(&self) -> bool {
        self.image.data().iter().all(|&c| c == 0)
    }

    pub fn width(&self) -> usize {
        self.image.width()
    }

    pub fn height(&self) -> usize {
        self.image.height()
    }

    pub fn size(&self) -> Vec2<usize> {
        self.image.size()
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    /// Write the strokes to `path` as a transparent-background PNG.
    pub fn export_png(&self, path: impl AsRef<Path>) -> Result<(), CanvasError> {
        compositor::export_png(&self.image, path)
    }
}
