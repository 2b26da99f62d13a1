use crate::{BlendMode, CanvasError};
use air_image::{save_png, Alpha, Frame};
use std::path::Path;

/// Blend `surface` over a copy of `live`. The result keeps `live`'s channel order.
///
/// # Errors
///
/// Returns `CanvasError::DimensionMismatch` if the two differ in size.
pub fn blend(live: &Frame, surface: &Frame, mode: BlendMode) -> Result<Frame, CanvasError> {
    let mut out = live.clone();
    blend_into(&mut out, surface, mode)?;
    Ok(out)
}

/// Blend `surface` over `live` in place.
///
/// All-zero surface pixels leave the live pixel untouched.
pub fn blend_into(live: &mut Frame, surface: &Frame, mode: BlendMode) -> Result<(), CanvasError> {
    if !live.same_size(surface) {
        return Err(CanvasError::DimensionMismatch {
            expected: surface.size(),
            got: live.size(),
        });
    }

    let (live_order, surface_order) = (live.order(), surface.order());
    let src = surface.data().chunks_exact(Frame::CHANNELS);
    let dst = live.data_mut().chunks_exact_mut(Frame::CHANNELS);
    for (s, d) in src.zip(dst) {
        if s.iter().all(|&c| c == 0) {
            continue;
        }
        let stroke = surface_order.to_rgb([s[0], s[1], s[2]]);
        let rgb = match mode {
            BlendMode::Overlay => stroke,
            BlendMode::Max => {
                let under = live_order.to_rgb([d[0], d[1], d[2]]);
                [
                    stroke[0].max(under[0]),
                    stroke[1].max(under[1]),
                    stroke[2].max(under[2]),
                ]
            }
        };
        d.copy_from_slice(&live_order.arrange(rgb));
    }
    Ok(())
}

/// Save a surface image as PNG. Undrawn pixels become transparent.
pub fn export_png(surface: &Frame, path: impl AsRef<Path>) -> Result<(), CanvasError> {
    let path = path.as_ref();
    save_png(surface, Alpha::BlackIsTransparent, path)?;
    log::info!("exported drawing to {}", path.display());
    Ok(())
}
