//! Tests for descriptor serialization

#[cfg(test)]
mod tests {
    use sweepbench::spec::descriptor::{
        AgentParams, DescriptorKind, GridSize, InstanceSpec, NoiseParams, descriptor_id,
    };

    fn sample(noise: Option<NoiseParams>) -> InstanceSpec {
        InstanceSpec {
            id: descriptor_id("const_obj_no_agents_dim_incr", 500, 7),
            kind: DescriptorKind::Settings,
            seed: 7,
            greedy: true,
            obstacles: 800,
            time_max: 1000,
            size: GridSize::square(500),
            agents: AgentParams {
                number: 0,
                stop_probability: 1.0,
            },
            noise,
        }
    }

    // Tests id layout is sweep, value and repetition joined by underscores
    // Verified by swapping value and repetition
    #[test]
    fn test_descriptor_id_format() {
        assert_eq!(descriptor_id("obs_incr", 1250, 3), "obs_incr_1250_3");
    }

    // Tests the document carries every field the generator reads
    // Verified by renaming the kind variant
    #[test]
    fn test_yaml_field_names() {
        let yaml = sample(Some(NoiseParams {
            cell_size: 5,
            offset: 0.1,
        }))
        .to_yaml()
        .unwrap();

        assert!(yaml.contains("id: const_obj_no_agents_dim_incr_500_7"));
        assert!(yaml.contains("kind: settings"));
        assert!(yaml.contains("seed: 7"));
        assert!(yaml.contains("greedy: true"));
        assert!(yaml.contains("obstacles: 800"));
        assert!(yaml.contains("time_max: 1000"));
        assert!(yaml.contains("width: 500"));
        assert!(yaml.contains("height: 500"));
        assert!(yaml.contains("stop_probability: 1.0"));
        assert!(yaml.contains("cell_size: 5"));
        assert!(yaml.contains("offset: 0.1"));
    }

    // Tests absent noise is omitted rather than written as null
    // Verified by removing skip_serializing_if
    #[test]
    fn test_absent_noise_is_omitted() {
        let yaml = sample(None).to_yaml().unwrap();
        assert!(!yaml.contains("noise"));
    }

    // Tests descriptors survive a serialization round trip
    // Verified by dropping the noise field on deserialization
    #[test]
    fn test_round_trip_preserves_fields() {
        for spec in [
            sample(None),
            sample(Some(NoiseParams {
                cell_size: 5,
                offset: 0.1,
            })),
        ] {
            let parsed = InstanceSpec::from_yaml(&spec.to_yaml().unwrap()).unwrap();
            assert_eq!(parsed, spec);
        }
    }

    // Tests documents with another kind are rejected
    // Verified by accepting any kind string
    #[test]
    fn test_unknown_kind_rejected() {
        let yaml = sample(None).to_yaml().unwrap().replace("settings", "solver");
        assert!(InstanceSpec::from_yaml(&yaml).is_err());
    }
}
