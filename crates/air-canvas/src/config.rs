use air_image::Rgb;

/// Pen used for strokes on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    color: Rgb,
    thickness: u32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: [255, 0, 255],
            thickness: 8,
        }
    }
}

impl StrokeStyle {
    pub const MAX_THICKNESS: u32 = 256;

    /// Pure black is reserved for "undrawn" and becomes `[1, 1, 1]`.
    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = if color == [0, 0, 0] { [1, 1, 1] } else { color };
        self
    }

    /// Clamped to `1..=MAX_THICKNESS`.
    pub fn with_thickness(mut self, thickness: u32) -> Self {
        self.thickness = thickness.clamp(1, Self::MAX_THICKNESS);
        self
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn thickness(&self) -> u32 {
        self.thickness
    }
}

/// How drawn pixels combine with the live frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendMode {
    /// Drawn pixels replace the live pixel.
    #[default]
    Overlay,
    /// Per-channel maximum of drawn and live pixel.
    Max,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    stroke: StrokeStyle,
    blend: BlendMode,
    mirror: bool,
    annotate: bool,
    clear_on_gesture: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::default(),
            blend: BlendMode::Overlay,
            mirror: true,
            annotate: false,
            clear_on_gesture: false,
        }
    }
}

impl SessionConfig {
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn with_blend(mut self, blend: BlendMode) -> Self {
        self.blend = blend;
        self
    }

    /// Flip frames horizontally before processing, so the display acts like a mirror.
    pub fn with_mirror(mut self, mirror: bool) -> Self {
        self.mirror = mirror;
        self
    }

    /// Draw the hand skeleton onto the composite.
    pub fn with_annotate(mut self, annotate: bool) -> Self {
        self.annotate = annotate;
        self
    }

    /// Wipe the surface whenever the clear gesture (open hand) is seen.
    pub fn with_clear_on_gesture(mut self, clear_on_gesture: bool) -> Self {
        self.clear_on_gesture = clear_on_gesture;
        self
    }

    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    pub fn blend(&self) -> BlendMode {
        self.blend
    }

    pub fn mirror(&self) -> bool {
        self.mirror
    }

    pub fn annotate(&self) -> bool {
        self.annotate
    }

    pub fn clear_on_gesture(&self) -> bool {
        self.clear_on_gesture
    }
}
