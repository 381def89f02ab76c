use serde::{Deserialize, Serialize};

/// Inference tuning knobs sent alongside every chat request.
///
/// A field left at zero is treated as unset and dropped from the wire,
/// so an explicit `temperature: 0.0` cannot be expressed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(default)]
pub struct OllamaOptions {
    #[serde(skip_serializing_if = "is_zero_int")]
    pub num_gpu_layers: i32,
    #[serde(skip_serializing_if = "is_zero_int")]
    pub num_threads: i32,
    #[serde(skip_serializing_if = "is_zero_float")]
    pub temperature: f64,
    #[serde(skip_serializing_if = "is_zero_float")]
    pub top_p: f64,
}

fn is_zero_int(v: &i32) -> bool {
    *v == 0
}

fn is_zero_float(v: &f64) -> bool {
    *v == 0.0
}

impl OllamaOptions {
    pub fn with_gpu_layers(mut self, layers: i32) -> Self {
        self.num_gpu_layers = layers;
        self
    }

    pub fn with_threads(mut self, threads: i32) -> Self {
        self.num_threads = threads;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_top_p(mut self, top_p: f64) -> Self {
        self.top_p = top_p;
        self
    }
}
