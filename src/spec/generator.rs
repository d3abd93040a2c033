//! Materializes every descriptor of a sweep before measurement starts

use crate::io::error::{HarnessError, Result, file_system};
use crate::io::paths::ArtifactPaths;
use crate::spec::descriptor::InstanceSpec;
use crate::spec::sweep::SweepDefinition;
use std::fs;
use tracing::{debug, info};

/// Builds and writes the descriptors of one sweep
pub struct SpecGenerator<'a> {
    paths: &'a ArtifactPaths,
}

impl<'a> SpecGenerator<'a> {
    /// Generator writing into the sweep directory of `paths`
    pub const fn new(paths: &'a ArtifactPaths) -> Self {
        Self { paths }
    }

    /// One descriptor per (value, repetition), values outer, repetitions inner
    pub fn generate(sweep: &SweepDefinition) -> Vec<InstanceSpec> {
        sweep
            .parameter_range()
            .iter()
            .flat_map(|&value| {
                (0..sweep.repetitions()).map(move |repetition| sweep.descriptor(value, repetition))
            })
            .collect()
    }

    /// Generate and write every descriptor of `sweep`
    ///
    /// Existing files are overwritten, so regenerating an unchanged sweep
    /// yields byte-identical output.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The sweep directory cannot be created
    /// - A descriptor cannot be serialized
    /// - A descriptor file cannot be written
    pub fn write_all(&self, sweep: &SweepDefinition) -> Result<Vec<InstanceSpec>> {
        let dir = self.paths.sweep_dir();
        fs::create_dir_all(dir).map_err(|e| file_system(dir, "create directory", e))?;

        let specs = Self::generate(sweep);
        for spec in &specs {
            self.write(spec)?;
        }

        info!(
            sweep = sweep.name(),
            descriptors = specs.len(),
            dir = %dir.display(),
            "generated descriptors"
        );
        Ok(specs)
    }

    /// Write a single descriptor to `<id>.yaml`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the file write fails
    pub fn write(&self, spec: &InstanceSpec) -> Result<()> {
        let path = self.paths.descriptor(&spec.id);
        let yaml = spec.to_yaml().map_err(|e| HarnessError::DescriptorWrite {
            path: path.clone(),
            source: e,
        })?;
        fs::write(&path, yaml).map_err(|e| file_system(&path, "write descriptor", e))?;
        debug!(id = %spec.id, path = %path.display(), "wrote descriptor");
        Ok(())
    }
}
