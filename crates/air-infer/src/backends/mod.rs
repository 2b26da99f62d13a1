#[cfg(feature = "onnx")]
mod onnx;

#[cfg(feature = "onnx")]
pub use onnx::{ndarray_to_tensor, OnnxBackend, OnnxSession};
