use crate::ImageError;
use air_base::{Tensor, Vec2};

/// A color given as `[r, g, b]`.
pub type Rgb = [u8; 3];

/// Byte order of the three channels in a [`Frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelOrder {
    Rgb,
    /// What most camera stacks (and OpenCV) hand out.
    Bgr,
}

impl ChannelOrder {
    /// Lay out an RGB color in this order.
    pub fn arrange(self, color: Rgb) -> [u8; 3] {
        match self {
            ChannelOrder::Rgb => color,
            ChannelOrder::Bgr => [color[2], color[1], color[0]],
        }
    }

    /// Read a stored pixel in this order back as RGB.
    pub fn to_rgb(self, stored: [u8; 3]) -> Rgb {
        // swapping R and B is its own inverse
        self.arrange(stored)
    }
}

/// An 8-bit, three-channel raster in HWC layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    order: ChannelOrder,
    pixels: Tensor<u8>,
}

impl Frame {
    pub const CHANNELS: usize = 3;

    /// Wrap raw interleaved pixel bytes.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::Tensor` if `data` does not hold exactly
    /// `width * height * 3` bytes.
    pub fn new(
        width: usize,
        height: usize,
        order: ChannelOrder,
        data: Vec<u8>,
    ) -> Result<Self, ImageError> {
        let pixels = Tensor::new(vec![height, width, Self::CHANNELS], data)?;
        Ok(Self { order, pixels })
    }

    /// Wrap an existing `[height, width, 3]` tensor.
    pub fn from_tensor(pixels: Tensor<u8>, order: ChannelOrder) -> Result<Self, ImageError> {
        if pixels.shape.len() != 3 || pixels.shape[2] != Self::CHANNELS {
            return Err(ImageError::Shape(format!(
                "expected [H, W, 3], got {:?}",
                pixels.shape
            )));
        }
        Ok(Self { order, pixels })
    }

    /// An all-zero frame.
    pub fn blank(width: usize, height: usize, order: ChannelOrder) -> Result<Self, ImageError> {
        let pixels = Tensor::zeros(vec![height, width, Self::CHANNELS])?;
        Ok(Self { order, pixels })
    }

    pub fn width(&self) -> usize {
        self.pixels.shape[1]
    }

    pub fn height(&self) -> usize {
        self.pixels.shape[0]
    }

    pub fn size(&self) -> Vec2<usize> {
        Vec2::new(self.width(), self.height())
    }

    pub fn order(&self) -> ChannelOrder {
        self.order
    }

    /// True when the frame has no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn same_size(&self, other: &Frame) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    pub fn data(&self) -> &[u8] {
        &self.pixels.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.pixels.data
    }

    pub fn tensor(&self) -> &Tensor<u8> {
        &self.pixels
    }

    pub fn into_tensor(self) -> Tensor<u8> {
        self.pixels
    }

    fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y * self.width() + x) * Self::CHANNELS)
    }

    /// Pixel at `(x, y)` converted to RGB, or `None` outside the frame.
    pub fn rgb_at(&self, x: i32, y: i32) -> Option<Rgb> {
        let i = self.offset(x, y)?;
        let d = &self.pixels.data;
        Some(self.order.to_rgb([d[i], d[i + 1], d[i + 2]]))
    }

    /// Write an RGB color at `(x, y)`. Out-of-bounds writes are dropped.
    pub fn put_rgb(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.offset(x, y) {
            let stored = self.order.arrange(color);
            self.pixels.data[i..i + Self::CHANNELS].copy_from_slice(&stored);
        }
    }

    /// Copy of this frame with its channels laid out in `order`.
    pub fn to_order(&self, order: ChannelOrder) -> Frame {
        if order == self.order {
            return self.clone();
        }
        let mut out = self.clone();
        out.swap_red_blue();
        out.order = order;
        out
    }

    /// Copy of this frame in RGB order.
    pub fn to_rgb(&self) -> Frame {
        self.to_order(ChannelOrder::Rgb)
    }

    fn swap_red_blue(&mut self) {
        for px in self.pixels.data.chunks_exact_mut(Self::CHANNELS) {
            px.swap(0, 2);
        }
    }

    /// Flip the frame left to right in place.
    pub fn mirror_horizontal(&mut self) {
        let row_len = self.width() * Self::CHANNELS;
        if row_len == 0 {
            return;
        }
        for row in self.pixels.data.chunks_exact_mut(row_len) {
            let width = row_len / Self::CHANNELS;
            for x in 0..width / 2 {
                let left = x * Self::CHANNELS;
                let right = (width - 1 - x) * Self::CHANNELS;
                for c in 0..Self::CHANNELS {
                    row.swap(left + c, right + c);
                }
            }
        }
    }
}
