//! Argument handling for the `visionspec` binary.
//!
//! This is the boundary layer: form-style input is validated here before it
//! reaches the engine, and every result is printed as JSON.

use crate::recommendations::types::require_positive;
use crate::recommendations::{
    RecommendationEngine, Regime, RegimeInfo, RoomDimensions, StudyInput,
};
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "visionspec")]
#[command(about = "Display size recommendations from viewing distance")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the base size table
    Table,

    /// Print the viewing regimes with their picture-height multiples
    Regimes,

    /// Print the (interpolated) row for a size
    Size {
        /// Nominal diagonal in inches
        #[arg(allow_negative_numbers = true)]
        inches: f64,
    },

    /// Print 4H/6H/8H recommendations for a viewing distance
    Recommend {
        /// Viewing distance in meters
        #[arg(allow_negative_numbers = true)]
        distance_m: f64,

        /// Only this regime (4H, 6H or 8H)
        #[arg(long)]
        regime: Option<Regime>,
    },

    /// Print a full study
    Study {
        /// Viewing distance in meters
        #[arg(allow_negative_numbers = true)]
        distance_m: f64,

        #[arg(long, default_value = "")]
        project: String,

        #[arg(long, default_value = "")]
        client: String,

        #[arg(long, default_value = "")]
        room: String,

        /// Viewer eye height in meters; enables the ceiling-fit check
        #[arg(long, allow_negative_numbers = true)]
        eye_height: Option<f64>,

        /// Ceiling height in meters (defaults to 2.8)
        #[arg(long, requires = "eye_height", allow_negative_numbers = true)]
        ceiling_height: Option<f64>,
    },

    /// Print recommendations for a set of sample distances
    Examples,
}

/// A parsed and validated request, ready for the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Table,
    Regimes,
    Size(f64),
    Recommend {
        distance_m: f64,
        regime: Option<Regime>,
    },
    Study(StudyInput),
    Examples,
}

impl Cli {
    pub fn into_command(self) -> Result<Command> {
        let command = match self.command {
            Commands::Table => Command::Table,
            Commands::Regimes => Command::Regimes,
            Commands::Examples => Command::Examples,
            Commands::Size { inches } => Command::Size(inches),
            Commands::Recommend { distance_m, regime } => {
                require_positive("viewing_distance_m", distance_m)?;
                Command::Recommend { distance_m, regime }
            }
            Commands::Study {
                distance_m,
                project,
                client,
                room,
                eye_height,
                ceiling_height,
            } => {
                let mut input = StudyInput::new(project, client, room, distance_m);
                if let Some(eye) = eye_height {
                    let mut dims = RoomDimensions::new(eye);
                    if let Some(ceiling) = ceiling_height {
                        dims.ceiling_height_m = ceiling;
                    }
                    input.room = Some(dims);
                }
                input.validate()?;
                Command::Study(input)
            }
        };
        Ok(command)
    }
}

/// Parse and validate arguments, excluding the program name.
pub fn parse(args: &[String]) -> Result<Command> {
    let argv = std::iter::once("visionspec".to_string()).chain(args.iter().cloned());
    Cli::try_parse_from(argv)?.into_command()
}

/// Execute a command and render its result as pretty JSON.
pub fn run(command: Command, engine: &RecommendationEngine) -> Result<String> {
    let json = match command {
        Command::Table => serde_json::to_string_pretty(engine.base_tvs())?,
        Command::Regimes => {
            let legend: Vec<RegimeInfo> = Regime::ALL.iter().map(|&r| r.into()).collect();
            serde_json::to_string_pretty(&legend)?
        }
        Command::Size(size) => serde_json::to_string_pretty(&engine.calculate_by_size(size)?)?,
        Command::Recommend {
            distance_m,
            regime: Some(regime),
        } => serde_json::to_string_pretty(&engine.recommend_by_distance(distance_m, regime)?)?,
        Command::Recommend {
            distance_m,
            regime: None,
        } => serde_json::to_string_pretty(&engine.recommend_all(distance_m)?)?,
        Command::Study(input) => serde_json::to_string_pretty(&engine.create_study(input)?)?,
        Command::Examples => serde_json::to_string_pretty(&engine.sample_grid()?)?,
    };
    Ok(json)
}
