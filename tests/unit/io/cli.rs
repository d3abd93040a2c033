//! Tests for command-line interface parsing and sweep selection

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::ffi::OsString;
    use std::path::PathBuf;
    use sweepbench::io::cli::{Cli, SweepProcessor};
    use sweepbench::io::configuration::{
        DEFAULT_CHART_DIR, DEFAULT_OUTPUT_ROOT, DEFAULT_PROFILER, DEFAULT_PROGRAM,
        DEFAULT_REPORT_TOOL, OBSTACLE_REPETITIONS,
    };
    use sweepbench::spec::catalog::SweepKind;

    // Tests CLI parsing with no arguments uses every default
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["sweepbench"]);

        assert!(cli.sweeps.is_empty());
        assert_eq!(cli.program, PathBuf::from(DEFAULT_PROGRAM));
        assert_eq!(cli.profiler, PathBuf::from(DEFAULT_PROFILER));
        assert_eq!(cli.report_tool, PathBuf::from(DEFAULT_REPORT_TOOL));
        assert_eq!(cli.output_root, PathBuf::from(DEFAULT_OUTPUT_ROOT));
        assert_eq!(cli.chart_dir, PathBuf::from(DEFAULT_CHART_DIR));
        assert_eq!(cli.repetitions, None);
        assert!(!cli.generate_only);
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming a long flag
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "sweepbench",
            "obstacles",
            "--program",
            "bin/gen",
            "--profiler",
            "/usr/bin/heaptrack",
            "--report-tool",
            "/usr/bin/heaptrack_print",
            "--output-root",
            "scratch",
            "--chart-dir",
            "charts",
            "--repetitions",
            "3",
            "--generate-only",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.sweeps, vec![SweepKind::Obstacles]);
        assert_eq!(cli.program, PathBuf::from("bin/gen"));
        assert_eq!(cli.profiler, PathBuf::from("/usr/bin/heaptrack"));
        assert_eq!(cli.report_tool, PathBuf::from("/usr/bin/heaptrack_print"));
        assert_eq!(cli.output_root, PathBuf::from("scratch"));
        assert_eq!(cli.chart_dir, PathBuf::from("charts"));
        assert_eq!(cli.repetitions, Some(3));
        assert!(cli.generate_only);
        assert!(!cli.should_show_progress());
        assert!(cli.verbose);
    }

    // Tests sweep selection keeps run order regardless of argument order
    // Verified by returning sweeps in argument order
    #[test]
    fn test_selected_sweeps_order() {
        let all = Cli::parse_from(["sweepbench"]);
        assert_eq!(
            all.selected_sweeps(),
            vec![SweepKind::Dimension, SweepKind::Obstacles]
        );

        let reversed = Cli::parse_from(["sweepbench", "obstacles", "dimension"]);
        assert_eq!(
            reversed.selected_sweeps(),
            vec![SweepKind::Dimension, SweepKind::Obstacles]
        );
    }

    // Tests unknown sweep names are rejected
    // Verified by accepting arbitrary strings
    #[test]
    fn test_unknown_sweep_rejected() {
        assert!(Cli::try_parse_from(["sweepbench", "latency"]).is_err());
    }

    // Tests the repetition override reaches the sweep definition
    // Verified by ignoring the override
    #[test]
    fn test_repetition_override() {
        let overridden = SweepProcessor::new(Cli::parse_from(["sweepbench", "-r", "2", "-q"]));
        let sweep = overridden.definition(SweepKind::Obstacles).unwrap();
        assert_eq!(sweep.repetitions(), 2);

        let default = SweepProcessor::new(Cli::parse_from(["sweepbench", "-q"]));
        let sweep = default.definition(SweepKind::Obstacles).unwrap();
        assert_eq!(sweep.repetitions(), OBSTACLE_REPETITIONS);

        let zero = SweepProcessor::new(Cli::parse_from(["sweepbench", "-r", "0", "-q"]));
        assert!(zero.definition(SweepKind::Dimension).is_err());
    }

    // Tests generate-only mode writes descriptors without launching anything
    // Verified by running the sweep regardless of the flag
    #[test]
    fn test_generate_only_writes_descriptors() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("instances");
        let charts = dir.path().join("charts");

        let args: [OsString; 10] = [
            "sweepbench".into(),
            "obstacles".into(),
            "--generate-only".into(),
            "--quiet".into(),
            "--repetitions".into(),
            "1".into(),
            "--output-root".into(),
            root.clone().into_os_string(),
            "--chart-dir".into(),
            charts.clone().into_os_string(),
        ];
        let mut processor = SweepProcessor::new(Cli::parse_from(args));
        processor.process().unwrap();

        let written = std::fs::read_dir(root.join(SweepKind::Obstacles.name()))
            .unwrap()
            .count();
        assert_eq!(written, 36);
        assert!(!charts.exists());
    }
}
