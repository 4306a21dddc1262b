mod inputs;
mod outputs;

pub use inputs::{InputField, ParseFieldError, ScenarioInputs};
pub use outputs::{OutputMetric, ScenarioOutputs};
