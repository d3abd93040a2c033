//! Instance descriptors handed to the external generator

use serde::{Deserialize, Serialize};

/// Discriminator marking a document as generator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DescriptorKind {
    /// `kind: settings`
    Settings,
}

/// Grid dimensions of the generated instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSize {
    /// Columns
    pub width: u64,
    /// Rows
    pub height: u64,
}

impl GridSize {
    /// Square grid with the given side
    pub const fn square(side: u64) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// Agent population parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentParams {
    /// Number of agents
    pub number: u64,
    /// Probability that an agent stops on any move, in `[0, 1]`
    pub stop_probability: f64,
}

/// Noise field parameters, only present in grid dimension sweeps
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NoiseParams {
    /// Noise cell size in grid cells
    pub cell_size: u64,
    /// Noise offset
    pub offset: f64,
}

/// One trial configuration for the instance generator
///
/// Written once per sample as `<id>.yaml` and read back only by the
/// external program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstanceSpec {
    /// Unique within a sweep: `<sweep>_<value>_<repetition>`
    pub id: String,
    /// Always [`DescriptorKind::Settings`]
    pub kind: DescriptorKind,
    /// Generator seed, equal to the repetition index
    pub seed: u64,
    /// Greedy placement flag passed through to the generator
    pub greedy: bool,
    /// Obstacle count
    pub obstacles: u64,
    /// Generator time budget
    pub time_max: u64,
    /// Grid dimensions
    pub size: GridSize,
    /// Agent parameters
    pub agents: AgentParams,
    /// Noise parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub noise: Option<NoiseParams>,
}

/// Descriptor id of one sample
pub fn descriptor_id(sweep: &str, value: u64, repetition: u64) -> String {
    format!("{sweep}_{value}_{repetition}")
}

impl InstanceSpec {
    /// Serialize as a YAML document
    ///
    /// # Errors
    ///
    /// Returns the serializer error if the document cannot be produced
    pub fn to_yaml(&self) -> std::result::Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    /// Parse a YAML document
    ///
    /// # Errors
    ///
    /// Returns the deserializer error if the text is not a valid descriptor
    pub fn from_yaml(text: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}
