use ndarray::Array4;
use std::path::Path;
use std::sync::Mutex;
use tch::{CModule, Device, Kind, Tensor};

use super::InferenceError;
use super::model::XrayModel;

/// A TorchScript module taking an NHWC float batch.
pub struct TorchModel {
    module: Mutex<CModule>,
    device: Device,
}

impl TorchModel {
    pub fn load(path: &Path) -> Result<Self, InferenceError> {
        let device = Device::cuda_if_available();
        let module = CModule::load_on_device(path, device)?;
        Ok(Self {
            module: Mutex::new(module),
            device,
        })
    }
}

impl XrayModel for TorchModel {
    fn forward(&self, input: &Array4<f32>) -> Result<Vec<f32>, InferenceError> {
        let shape: Vec<i64> = input.shape().iter().map(|&d| d as i64).collect();
        let data: Vec<f32> = input.iter().copied().collect();
        let tensor = Tensor::from_slice(&data)
            .view(shape.as_slice())
            .to_device(self.device);

        let module = self.module.lock().map_err(|_| InferenceError::Poisoned)?;
        let output = tch::no_grad(|| module.forward_ts(&[tensor]))?;

        let flat = output.to_kind(Kind::Float).view([-1]);
        let len = flat.size()[0] as usize;
        let mut scores = vec![0.0f32; len];
        flat.copy_data(&mut scores, len);
        Ok(scores)
    }
}
