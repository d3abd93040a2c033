//! Sweep definitions: the independent variable and its domain

use crate::io::error::{Result, invalid_parameter};
use crate::spec::descriptor::{InstanceSpec, descriptor_id};
use std::fmt;

/// Maps `(id, parameter value, repetition)` to the descriptor of that sample
pub type DescriptorTemplate = Box<dyn Fn(String, u64, u64) -> InstanceSpec>;

/// Ordered parameter domain, repetition count and descriptor template of one sweep
pub struct SweepDefinition {
    name: String,
    parameter_range: Vec<u64>,
    repetitions: u64,
    timed: bool,
    template: DescriptorTemplate,
}

impl fmt::Debug for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SweepDefinition")
            .field("name", &self.name)
            .field("parameter_range", &self.parameter_range)
            .field("repetitions", &self.repetitions)
            .field("timed", &self.timed)
            .finish_non_exhaustive()
    }
}

impl SweepDefinition {
    /// Create a sweep definition
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `parameter_range` is empty or not strictly ascending
    /// - `repetitions` is zero
    pub fn new(
        name: impl Into<String>,
        parameter_range: Vec<u64>,
        repetitions: u64,
        timed: bool,
        template: DescriptorTemplate,
    ) -> Result<Self> {
        if parameter_range.is_empty() {
            return Err(invalid_parameter(
                "parameter_range",
                &"[]",
                &"a sweep needs at least one value",
            ));
        }
        if parameter_range.windows(2).any(|pair| match pair {
            [a, b] => a >= b,
            _ => false,
        }) {
            return Err(invalid_parameter(
                "parameter_range",
                &format!("{parameter_range:?}"),
                &"values must be strictly ascending",
            ));
        }
        if repetitions == 0 {
            return Err(invalid_parameter(
                "repetitions",
                &repetitions,
                &"must be at least 1",
            ));
        }

        Ok(Self {
            name: name.into(),
            parameter_range,
            repetitions,
            timed,
            template,
        })
    }

    /// Sweep name, used as descriptor id prefix and artifact directory
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameter values in ascending order
    pub fn parameter_range(&self) -> &[u64] {
        &self.parameter_range
    }

    /// Repetitions per parameter value
    pub const fn repetitions(&self) -> u64 {
        self.repetitions
    }

    /// Whether wall-clock durations are recorded
    pub const fn timed(&self) -> bool {
        self.timed
    }

    /// Same sweep with a different repetition count
    ///
    /// # Errors
    ///
    /// Returns an error if `repetitions` is zero
    pub fn with_repetitions(self, repetitions: u64) -> Result<Self> {
        Self::new(
            self.name,
            self.parameter_range,
            repetitions,
            self.timed,
            self.template,
        )
    }

    /// Total number of samples, values times repetitions
    pub fn sample_count(&self) -> u64 {
        self.parameter_range.len() as u64 * self.repetitions
    }

    /// Descriptor of one sample
    pub fn descriptor(&self, value: u64, repetition: u64) -> InstanceSpec {
        let id = descriptor_id(&self.name, value, repetition);
        (self.template)(id, value, repetition)
    }
}

/// Inclusive stepped range, e.g. `stepped_range(500, 5000, 100)`
///
/// # Errors
///
/// Returns an error if `step` is zero or `start > end`
pub fn stepped_range(start: u64, end: u64, step: u64) -> Result<Vec<u64>> {
    if step == 0 {
        return Err(invalid_parameter("step", &step, &"must be positive"));
    }
    if start > end {
        return Err(invalid_parameter(
            "start",
            &start,
            &format!("must not exceed end ({end})"),
        ));
    }
    Ok((start..=end).step_by(step as usize).collect())
}
