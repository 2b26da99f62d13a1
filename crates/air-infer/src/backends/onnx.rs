use crate::{Backend, Device, InferError, ModelSource, Session};
use air_base::Tensor;
use ndarray::{ArrayViewD, IxDyn};
use ort::{inputs, session::Session as OrtSession, value::TensorRef};
use std::collections::HashMap;

/// ONNX Runtime backend.
pub struct OnnxBackend {
    device: Device,
}

impl OnnxBackend {
    pub fn new(device: Device) -> Self {
        Self { device }
    }
}

impl Backend for OnnxBackend {
    fn name(&self) -> &str {
        "onnx"
    }

    fn load_model(&self, model: ModelSource) -> Result<Box<dyn Session>, InferError> {
        let device = &self.device;
        let mut builder = OrtSession::builder().map_err(|e| {
            InferError::BackendError(format!("failed to create session builder: {}", e))
        })?;

        builder = match device {
            Device::Cpu => {
                log::info!("onnx: using CPU execution provider");
                builder
            }
            #[cfg(feature = "cuda")]
            Device::Cuda { device_id } => {
                use ort::ep::ExecutionProvider;
                use ort::execution_providers::CUDAExecutionProvider;
                let ep = CUDAExecutionProvider::default().with_device_id(*device_id);
                let available = ep.is_available().unwrap_or(false);
                log::info!(
                    "onnx: CUDA execution provider requested (device_id={}), available: {}",
                    device_id,
                    available
                );
                builder
                    .with_execution_providers([ep.build()])
                    .map_err(|_| InferError::UnsupportedDevice(device.clone()))?
            }
            #[cfg(not(feature = "cuda"))]
            Device::Cuda { .. } => {
                return Err(InferError::UnsupportedDevice(device.clone()));
            }
        };

        let description = model.describe();
        let session = match model {
            ModelSource::File(path) => builder.commit_from_file(path).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from file: {}", e))
            })?,
            ModelSource::Memory(bytes) => builder.commit_from_memory(&bytes).map_err(|e| {
                InferError::ModelLoad(format!("failed to load model from memory: {}", e))
            })?,
        };

        let input_names: Vec<String> = session
            .inputs()
            .iter()
            .map(|input| input.name().to_string())
            .collect();
        let output_names: Vec<String> = session
            .outputs()
            .iter()
            .map(|output| output.name().to_string())
            .collect();
        log::info!(
            "onnx: loaded {} (inputs {:?}, outputs {:?})",
            description,
            input_names,
            output_names
        );

        Ok(Box::new(OnnxSession {
            session,
            input_names,
            output_names,
        }))
    }
}

pub struct OnnxSession {
    session: OrtSession,
    input_names: Vec<String>,
    output_names: Vec<String>,
}

impl Drop for OnnxSession {
    fn drop(&mut self) {
        log::debug!("onnx: releasing session");
    }
}

impl Session for OnnxSession {
    fn run(
        &mut self,
        inputs: &[(&str, Tensor<f32>)],
    ) -> Result<HashMap<String, Tensor<f32>>, InferError> {
        // hand landmark models take a single image input
        let [(name, tensor)] = inputs else {
            return Err(InferError::BackendError(format!(
                "expected exactly 1 input, got {}",
                inputs.len()
            )));
        };
        if !self.input_names.iter().any(|n| n.as_str() == *name) {
            return Err(InferError::InvalidInput {
                name: name.to_string(),
                expected_names: self.input_names.clone(),
            });
        }

        if tensor.ndim() != 4 {
            return Err(InferError::ShapeMismatch {
                expected: "a batched image [1, C, H, W] or [1, H, W, C]".to_string(),
                got: format!("{:?}", tensor.shape),
            });
        }

        let view = tensor_view(tensor)?;
        let tensor_ref = TensorRef::from_array_view(view).map_err(|e| {
            InferError::BackendError(format!("failed to create tensor ref: {}", e))
        })?;
        let outputs = self
            .session
            .run(inputs![*name => tensor_ref])
            .map_err(|e| InferError::BackendError(format!("inference failed: {}", e)))?;

        let mut result = HashMap::new();
        for output_name in &self.output_names {
            let value = &outputs[output_name.as_str()];
            let array = value.try_extract_array::<f32>().map_err(|e| {
                InferError::UnsupportedDtype(format!("output '{}' is not f32: {}", output_name, e))
            })?;
            result.insert(output_name.clone(), ndarray_to_tensor(array)?);
        }

        Ok(result)
    }

    fn input_names(&self) -> &[String] {
        &self.input_names
    }

    fn output_names(&self) -> &[String] {
        &self.output_names
    }
}

/// Borrow a tensor as an ndarray view, avoiding a copy of the frame data.
fn tensor_view(tensor: &Tensor<f32>) -> Result<ArrayViewD<'_, f32>, InferError> {
    ArrayViewD::from_shape(IxDyn(&tensor.shape), &tensor.data).map_err(|e| {
        InferError::BackendError(format!("failed to view tensor as ndarray: {}", e))
    })
}

pub fn ndarray_to_tensor(
    array: ArrayViewD<'_, f32>,
) -> Result<Tensor<f32>, InferError> {
    let shape = array.shape().to_vec();
    let data = array.iter().copied().collect();
    Ok(Tensor::new(shape, data)?)
}
