//! Tests for the built-in sweep catalog

#[cfg(test)]
mod tests {
    use std::path::Path;
    use sweepbench::chart::render::Metric;
    use sweepbench::spec::catalog::{SweepKind, ceil_sqrt};
    use sweepbench::spec::descriptor::GridSize;

    // Tests ceil_sqrt on perfect squares and their neighbours
    // Verified by using floor instead of ceiling
    #[test]
    fn test_ceil_sqrt() {
        assert_eq!(ceil_sqrt(0), 0);
        assert_eq!(ceil_sqrt(1), 1);
        assert_eq!(ceil_sqrt(1000), 32);
        assert_eq!(ceil_sqrt(1024), 32);
        assert_eq!(ceil_sqrt(1025), 33);
        assert_eq!(ceil_sqrt(9750), 99);
    }

    // Tests dimension sweep shape and descriptor contents
    // Verified by changing time_max to the dimension itself
    #[test]
    fn test_dimension_sweep() {
        let sweep = SweepKind::Dimension.definition().unwrap();
        let range = sweep.parameter_range();

        assert_eq!(range.len(), 46);
        assert_eq!(range.first(), Some(&500));
        assert_eq!(range.last(), Some(&5000));
        assert_eq!(sweep.repetitions(), 100);
        assert!(sweep.timed());

        let spec = sweep.descriptor(1200, 9);
        assert_eq!(spec.size, GridSize::square(1200));
        assert_eq!(spec.time_max, 2400);
        assert_eq!(spec.obstacles, 800);
        assert_eq!(spec.seed, 9);
        assert_eq!(spec.agents.number, 0);
        let noise = spec.noise.unwrap();
        assert_eq!(noise.cell_size, 5);
        assert!((noise.offset - 0.1).abs() < f64::EPSILON);
    }

    // Tests obstacle sweep shape and descriptor contents
    // Verified by sizing the grid with the floor square root
    #[test]
    fn test_obstacle_sweep() {
        let sweep = SweepKind::Obstacles.definition().unwrap();
        let range = sweep.parameter_range();

        assert_eq!(range.len(), 36);
        assert_eq!(range.last(), Some(&9750));
        assert_eq!(sweep.repetitions(), 25);
        assert!(!sweep.timed());

        let spec = sweep.descriptor(1250, 0);
        assert_eq!(spec.obstacles, 1250);
        assert_eq!(spec.size, GridSize::square(36));
        assert_eq!(spec.time_max, 1);
        assert!(spec.noise.is_none());
    }

    // Tests only the timed sweep asks for a wall-clock chart
    // Verified by adding a time chart to the obstacle sweep
    #[test]
    fn test_charts_match_timing() {
        let dir = Path::new("charts");
        for kind in SweepKind::ALL {
            let timed = kind.definition().unwrap().timed();
            for chart in kind.charts(dir) {
                assert!(chart.output.starts_with(dir));
                if chart.metric == Metric::WallClock {
                    assert!(timed, "{} charts time without timing", kind.name());
                }
            }
        }
    }

    // Tests dimension charts use the thinned selection and styles
    // Verified by filling the memory chart
    #[test]
    fn test_dimension_chart_styles() {
        let charts = SweepKind::Dimension.charts(Path::new("out"));
        assert_eq!(charts.len(), 2);

        let time = charts.first().unwrap();
        assert!(time.style.filled && time.style.notched);
        assert_eq!(time.output, Path::new("out/instance_gen_800_time.png"));

        let memory = charts.last().unwrap();
        assert!(!memory.style.filled && !memory.style.notched);
        assert_eq!(memory.selection, time.selection);
        assert_eq!(memory.selection.indices(46).unwrap().first(), Some(&5));
    }

    // Tests names double as artifact directories
    // Verified by swapping the names
    #[test]
    fn test_names() {
        assert_eq!(SweepKind::Dimension.name(), "const_obj_no_agents_dim_incr");
        assert_eq!(SweepKind::Obstacles.name(), "const_obj_no_agents_obs_incr");
        for kind in SweepKind::ALL {
            assert_eq!(kind.definition().unwrap().name(), kind.name());
        }
    }
}
