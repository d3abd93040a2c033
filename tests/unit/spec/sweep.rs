//! Tests for sweep definitions and stepped ranges

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use sweepbench::HarnessError;
    use sweepbench::spec::descriptor::{AgentParams, DescriptorKind, GridSize, InstanceSpec};
    use sweepbench::spec::sweep::{DescriptorTemplate, SweepDefinition, stepped_range};

    fn template() -> DescriptorTemplate {
        Box::new(|id, value, repetition| InstanceSpec {
            id,
            kind: DescriptorKind::Settings,
            seed: repetition,
            greedy: false,
            obstacles: value,
            time_max: 1,
            size: GridSize::square(value),
            agents: AgentParams {
                number: 0,
                stop_probability: 0.5,
            },
            noise: None,
        })
    }

    // Tests inclusive stepped ranges
    // Verified by making the end exclusive
    #[test]
    fn test_stepped_range_inclusive() {
        assert_eq!(stepped_range(500, 800, 100).unwrap(), vec![500, 600, 700, 800]);
        assert_eq!(stepped_range(1000, 1100, 250).unwrap(), vec![1000]);
        assert_eq!(stepped_range(5, 5, 1).unwrap(), vec![5]);
    }

    // Tests invalid stepped ranges are rejected
    // Verified by removing the zero step check
    #[test]
    fn test_stepped_range_invalid() {
        assert!(stepped_range(0, 10, 0).is_err());
        assert!(stepped_range(10, 0, 1).is_err());
    }

    // Tests range and repetition validation
    // Verified by allowing descending ranges
    #[test]
    fn test_definition_validation() {
        assert!(SweepDefinition::new("s", vec![], 1, true, template()).is_err());
        assert!(SweepDefinition::new("s", vec![2, 1], 1, true, template()).is_err());
        assert!(SweepDefinition::new("s", vec![1, 1], 1, true, template()).is_err());
        let zero = SweepDefinition::new("s", vec![1, 2], 0, true, template());
        assert!(matches!(
            zero,
            Err(HarnessError::InvalidParameter {
                parameter: "repetitions",
                ..
            })
        ));
        assert!(SweepDefinition::new("s", vec![1], 1, false, template()).is_ok());
    }

    // Tests descriptors get their id and seed from the sample coordinates
    // Verified by seeding with the parameter value
    #[test]
    fn test_descriptor_from_template() {
        let sweep = SweepDefinition::new("grid", vec![10, 20], 3, true, template()).unwrap();
        let spec = sweep.descriptor(20, 2);

        assert_eq!(spec.id, "grid_20_2");
        assert_eq!(spec.seed, 2);
        assert_eq!(spec.obstacles, 20);
        assert_eq!(spec.size, GridSize::square(20));
    }

    // Tests ids are unique over every sample of the sweep
    // Verified by dropping the repetition from the id
    #[test]
    fn test_ids_are_unique() {
        let sweep = SweepDefinition::new("grid", vec![1, 11, 111], 11, true, template()).unwrap();
        let ids: HashSet<String> = sweep
            .parameter_range()
            .iter()
            .flat_map(|&v| (0..sweep.repetitions()).map(move |r| (v, r)))
            .map(|(v, r)| sweep.descriptor(v, r).id)
            .collect();

        assert_eq!(ids.len() as u64, sweep.sample_count());
        assert_eq!(sweep.sample_count(), 33);
    }

    // Tests repetition override keeps everything else
    // Verified by resetting the range on override
    #[test]
    fn test_with_repetitions() {
        let sweep = SweepDefinition::new("grid", vec![1, 2], 5, false, template())
            .unwrap()
            .with_repetitions(2)
            .unwrap();

        assert_eq!(sweep.name(), "grid");
        assert_eq!(sweep.parameter_range(), &[1, 2]);
        assert_eq!(sweep.repetitions(), 2);
        assert!(!sweep.timed());
        assert!(format!("{sweep:?}").contains("grid"));
    }
}
