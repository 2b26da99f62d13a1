use crate::{Frame, Rgb};
use air_base::Vec2;

/// Draw a one-pixel line using Bresenham's algorithm, clipped to the frame.
pub fn draw_line(frame: &mut Frame, from: Vec2<i32>, to: Vec2<i32>, color: Rgb) {
    let max = Vec2::new(frame.width() as i32 - 1, frame.height() as i32 - 1);
    let Some((a, b)) = clip_segment(from, to, Vec2::new(0, 0), max) else {
        return;
    };
    for p in Bresenham::new(a, b) {
        frame.put_rgb(p.x, p.y, color);
    }
}

/// Draw a line `thickness` pixels wide with round caps.
///
/// The centerline is clipped to the frame grown by the pen radius, so strokes
/// that graze an edge still paint their visible half.
pub fn draw_thick_line(
    frame: &mut Frame,
    from: Vec2<i32>,
    to: Vec2<i32>,
    color: Rgb,
    thickness: u32,
) {
    if thickness <= 1 {
        draw_line(frame, from, to, color);
        return;
    }

    // a pen wider than the frame paints the same pixels as one just as wide
    let limit = (frame.width() + frame.height()).min(i32::MAX as usize / 4) as u32;
    let radius = (thickness / 2).min(limit) as i32;
    let min = Vec2::new(-radius, -radius);
    let max = Vec2::new(
        frame.width() as i32 - 1 + radius,
        frame.height() as i32 - 1 + radius,
    );
    let Some((a, b)) = clip_segment(from, to, min, max) else {
        return;
    };
    for p in Bresenham::new(a, b) {
        draw_filled_circle(frame, p, radius, color);
    }
}

/// Draw a filled circle, clipped to the frame.
pub fn draw_filled_circle(frame: &mut Frame, center: Vec2<i32>, radius: i32, color: Rgb) {
    if radius < 0 {
        return;
    }
    let (cx, cy, r) = (center.x as i64, center.y as i64, radius as i64);
    let r2 = r * r;
    // only visit rows and columns inside the frame
    let (y0, y1) = ((cy - r).max(0), (cy + r).min(frame.height() as i64 - 1));
    let (x0, x1) = ((cx - r).max(0), (cx + r).min(frame.width() as i64 - 1));
    for y in y0..=y1 {
        for x in x0..=x1 {
            let (dx, dy) = (x - cx, y - cy);
            if dx * dx + dy * dy <= r2 {
                frame.put_rgb(x as i32, y as i32, color);
            }
        }
    }
}

/// Integer points of a line from `a` to `b`, both ends included.
struct Bresenham {
    current: Vec2<i32>,
    end: Vec2<i32>,
    dx: i32,
    dy: i32,
    sx: i32,
    sy: i32,
    err: i32,
    done: bool,
}

impl Bresenham {
    fn new(a: Vec2<i32>, b: Vec2<i32>) -> Self {
        let dx = (b.x - a.x).abs();
        let dy = (b.y - a.y).abs();
        Self {
            current: a,
            end: b,
            dx,
            dy,
            sx: if a.x < b.x { 1 } else { -1 },
            sy: if a.y < b.y { 1 } else { -1 },
            err: dx - dy,
            done: false,
        }
    }
}

impl Iterator for Bresenham {
    type Item = Vec2<i32>;

    fn next(&mut self) -> Option<Vec2<i32>> {
        if self.done {
            return None;
        }
        let point = self.current;
        if point == self.end {
            self.done = true;
            return Some(point);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.current.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.current.y += self.sy;
        }
        Some(point)
    }
}

// Cohen-Sutherland outcodes
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; // 0001
const RIGHT: u8 = 2; // 0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; // 1000

fn outcode(p: Vec2<i64>, min: Vec2<i64>, max: Vec2<i64>) -> u8 {
    let mut code = INSIDE;
    if p.x < min.x {
        code |= LEFT;
    } else if p.x > max.x {
        code |= RIGHT;
    }
    if p.y < min.y {
        code |= TOP;
    } else if p.y > max.y {
        code |= BOTTOM;
    }
    code
}

/// Clip a segment to the inclusive box `[min, max]`.
///
/// Returns `None` when no part of the segment lies inside the box.
fn clip_segment(
    a: Vec2<i32>,
    b: Vec2<i32>,
    min: Vec2<i32>,
    max: Vec2<i32>,
) -> Option<(Vec2<i32>, Vec2<i32>)> {
    if min.x > max.x || min.y > max.y {
        return None;
    }

    // widen so the interpolation products cannot overflow
    let wide = |v: Vec2<i32>| Vec2::new(v.x as i64, v.y as i64);
    let (mut p0, mut p1) = (wide(a), wide(b));
    let (min, max) = (wide(min), wide(max));

    loop {
        let code0 = outcode(p0, min, max);
        let code1 = outcode(p1, min, max);

        if (code0 | code1) == 0 {
            return Some((
                Vec2::new(p0.x as i32, p0.y as i32),
                Vec2::new(p1.x as i32, p1.y as i32),
            ));
        }
        if (code0 & code1) != 0 {
            return None;
        }

        let code = if code0 != 0 { code0 } else { code1 };
        let d = p1 - p0;
        let clipped = if code & TOP != 0 {
            Vec2::new(p0.x + d.x * (min.y - p0.y) / d.y, min.y)
        } else if code & BOTTOM != 0 {
            Vec2::new(p0.x + d.x * (max.y - p0.y) / d.y, max.y)
        } else if code & LEFT != 0 {
            Vec2::new(min.x, p0.y + d.y * (min.x - p0.x) / d.x)
        } else {
            Vec2::new(max.x, p0.y + d.y * (max.x - p0.x) / d.x)
        };

        if code == code0 {
            p0 = clipped;
        } else {
            p1 = clipped;
        }
    }
}
