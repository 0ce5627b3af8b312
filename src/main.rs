// Copyright (C) 2025 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::error::Error;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{crate_version, Parser, Subcommand};
use duration_string::DurationString;

use rgbduo::color::Color;
use rgbduo::config::Lights;
use rgbduo::duty;
use rgbduo::pattern::{Constant, Pulse};

#[derive(Parser)]
#[clap(
    author = "Michael Wilson",
    version = crate_version!(),
    about = "A dual-channel RGBW LED pattern driver."
)]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Previews a color through the logging device.
    Preview {
        /// The color to preview, as a hex string (#RRGGBB or #RRGGBBWW).
        color: String,
        /// The pattern to preview the color with (constant or pulse).
        #[arg(short, long, default_value = "constant")]
        pattern: String,
        /// The pulse period. Only meaningful with the pulse pattern.
        #[arg(long, default_value = "2s")]
        period: String,
        /// How long to run the preview.
        #[arg(short, long, default_value = "3s")]
        duration: String,
        /// The path to a lights config.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Verifies a lights config file and prints the resolved settings.
    Check {
        /// The path to the lights config.
        config: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Preview {
            color,
            pattern,
            period,
            duration,
            config,
        } => {
            let config = match config {
                Some(path) => Lights::from_file(&path)?,
                None => Lights::default(),
            };

            let color = Color::from_hex(&color)?;
            let period: Duration = DurationString::from_string(period)?.into();
            let duration: Duration = DurationString::from_string(duration)?.into();

            let mut handler = config.handler(duty::log_device())?;
            handler.start();

            match pattern.as_str() {
                "constant" => handler.set_both(&Constant::new(color)),
                "pulse" => handler.set_both(&Pulse::new(color, period)),
                other => return Err(format!("unknown pattern '{}'", other).into()),
            }

            thread::sleep(duration);
            handler.stop();
        }
        Commands::Check { config } => {
            let config = Lights::from_file(&config)?;

            println!("Default color: {}", config.default_color()?);
            match config.timings()? {
                Some(timings) => println!(
                    "Transitions: {:?} steps every {:?} over {:?}",
                    timings.steps(),
                    timings.refresh_interval(),
                    timings.duration()
                ),
                None => println!("Transitions: disabled"),
            }
        }
    }

    Ok(())
}
