use crate::InferError;
use air_base::Tensor;
use air_image::{ChannelOrder, Frame};

/// Tensor layout a landmark model expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputLayout {
    /// `[1, 3, size, size]`
    Nchw,
    /// `[1, size, size, 3]`
    Nhwc,
}

/// Prepare an RGB frame for a square landmark model.
///
/// The whole frame is stretched to `size`×`size` with nearest-neighbor
/// sampling (no letterbox), so normalized model coordinates map straight back
/// onto the frame. Values are rescaled from [0, 255] to [0.0, 1.0].
pub fn preprocess(image: &Frame, size: usize, layout: InputLayout) -> Result<Tensor<f32>, InferError> {
    if image.order() != ChannelOrder::Rgb {
        return Err(InferError::UnsupportedInput(format!(
            "expected RGB frame, got {:?}",
            image.order()
        )));
    }
    if image.is_empty() || size == 0 {
        return Err(InferError::ShapeMismatch {
            expected: "non-empty [H, W, 3]".to_string(),
            got: format!("{:?}", image.tensor().shape),
        });
    }

    let (w, h) = (image.width(), image.height());
    let src = image.data();
    let plane = size * size;
    let mut out = vec![0.0f32; 3 * plane];

    for out_y in 0..size {
        let src_y = (out_y * h / size).min(h - 1);
        for out_x in 0..size {
            let src_x = (out_x * w / size).min(w - 1);
            let src_idx = (src_y * w + src_x) * 3;
            for ch in 0..3 {
                let value = src[src_idx + ch] as f32 / 255.0;
                let dst_idx = match layout {
                    InputLayout::Nchw => ch * plane + out_y * size + out_x,
                    InputLayout::Nhwc => (out_y * size + out_x) * 3 + ch,
                };
                out[dst_idx] = value;
            }
        }
    }

    let shape = match layout {
        InputLayout::Nchw => vec![1, 3, size, size],
        InputLayout::Nhwc => vec![1, size, size, 3],
    };
    Ok(Tensor::new(shape, out)?)
}
