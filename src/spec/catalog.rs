//! Built-in sweeps and the charts drawn from each

use crate::chart::render::{BoxStyle, ChartSpec, IndexSelection, Metric};
use crate::io::configuration::{
    AGENT_COUNT, AGENT_STOP_PROBABILITY, DIMENSION_CHART_START, DIMENSION_CHART_STEP,
    DIMENSION_END, DIMENSION_NOISE_CELL_SIZE, DIMENSION_NOISE_OFFSET, DIMENSION_OBSTACLES,
    DIMENSION_REPETITIONS, DIMENSION_START, DIMENSION_STEP, DIMENSION_SWEEP_NAME, OBSTACLE_END,
    OBSTACLE_REPETITIONS, OBSTACLE_START, OBSTACLE_STEP, OBSTACLE_SWEEP_NAME, OBSTACLE_TIME_MAX,
};
use crate::io::error::Result;
use crate::spec::descriptor::{AgentParams, DescriptorKind, GridSize, InstanceSpec, NoiseParams};
use crate::spec::sweep::{SweepDefinition, stepped_range};
use clap::ValueEnum;
use std::path::Path;

/// The sweeps this harness knows how to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SweepKind {
    /// Square grid growing from 500 to 5000 with 800 obstacles
    Dimension,
    /// Obstacles growing from 1000 to 9750 on a near-square grid
    Obstacles,
}

const fn disabled_agents() -> AgentParams {
    AgentParams {
        number: AGENT_COUNT,
        stop_probability: AGENT_STOP_PROBABILITY,
    }
}

/// Smallest `r` with `r * r >= n`
pub const fn ceil_sqrt(n: u64) -> u64 {
    let root = n.isqrt();
    if root * root < n { root + 1 } else { root }
}

impl SweepKind {
    /// All built-in sweeps in run order
    pub const ALL: [Self; 2] = [Self::Dimension, Self::Obstacles];

    /// Sweep name, also its artifact directory
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dimension => DIMENSION_SWEEP_NAME,
            Self::Obstacles => OBSTACLE_SWEEP_NAME,
        }
    }

    /// Build the sweep definition
    ///
    /// # Errors
    ///
    /// Returns an error if the configured range or repetition count is invalid
    pub fn definition(self) -> Result<SweepDefinition> {
        match self {
            Self::Dimension => SweepDefinition::new(
                DIMENSION_SWEEP_NAME,
                stepped_range(DIMENSION_START, DIMENSION_END, DIMENSION_STEP)?,
                DIMENSION_REPETITIONS,
                true,
                Box::new(|id, dim, repetition| InstanceSpec {
                    id,
                    kind: DescriptorKind::Settings,
                    seed: repetition,
                    greedy: true,
                    obstacles: DIMENSION_OBSTACLES,
                    time_max: dim * 2,
                    size: GridSize::square(dim),
                    agents: disabled_agents(),
                    noise: Some(NoiseParams {
                        cell_size: DIMENSION_NOISE_CELL_SIZE,
                        offset: DIMENSION_NOISE_OFFSET,
                    }),
                }),
            ),
            Self::Obstacles => SweepDefinition::new(
                OBSTACLE_SWEEP_NAME,
                stepped_range(OBSTACLE_START, OBSTACLE_END, OBSTACLE_STEP)?,
                OBSTACLE_REPETITIONS,
                false,
                Box::new(|id, obstacles, repetition| InstanceSpec {
                    id,
                    kind: DescriptorKind::Settings,
                    seed: repetition,
                    greedy: true,
                    obstacles,
                    time_max: OBSTACLE_TIME_MAX,
                    size: GridSize::square(ceil_sqrt(obstacles)),
                    agents: disabled_agents(),
                    noise: None,
                }),
            ),
        }
    }

    /// Charts drawn once the sweep has been aggregated
    pub fn charts(self, chart_dir: &Path) -> Vec<ChartSpec> {
        match self {
            Self::Dimension => {
                let title =
                    format!("Instance Generation, constant objects ({DIMENSION_OBSTACLES})");
                let selection = IndexSelection::new(DIMENSION_CHART_START, DIMENSION_CHART_STEP);
                vec![
                    ChartSpec {
                        metric: Metric::WallClock,
                        title: title.clone(),
                        x_label: "Instance dimensions".to_string(),
                        y_label: "Time took [ns]".to_string(),
                        output: chart_dir
                            .join(format!("instance_gen_{DIMENSION_OBSTACLES}_time.png")),
                        selection,
                        style: BoxStyle {
                            filled: true,
                            notched: true,
                        },
                    },
                    ChartSpec {
                        metric: Metric::PeakHeap,
                        title,
                        x_label: "Instance dimensions".to_string(),
                        y_label: "Allocated memory [B]".to_string(),
                        output: chart_dir
                            .join(format!("instance_gen_{DIMENSION_OBSTACLES}_mem.png")),
                        selection,
                        style: BoxStyle::default(),
                    },
                ]
            }
            Self::Obstacles => vec![ChartSpec {
                metric: Metric::PeakHeap,
                title: "Instance Generation variable number of obstacles".to_string(),
                x_label: "Number of obstacles".to_string(),
                y_label: "Allocated memory [B]".to_string(),
                output: chart_dir.join("instance_gen_obj_incr.png"),
                selection: IndexSelection::default(),
                style: BoxStyle::default(),
            }],
        }
    }
}
