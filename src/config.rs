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

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use duration_string::DurationString;
use serde::Deserialize;

use crate::color::Color;
use crate::duty;
use crate::handler::Handler;
use crate::transition::Timings;

/// The default transition refresh interval.
pub const DEFAULT_TRANSITION_REFRESH_INTERVAL: Duration = Duration::from_millis(20);

/// The default transition duration.
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Errors that can occur while loading a lights configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config load error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_yml::Error),

    #[error(transparent)]
    Color(#[from] crate::color::ColorError),

    #[error("invalid duration: {0}")]
    Duration(#[from] duration_string::Error),
}

/// A YAML representation of the lights configuration.
#[derive(Deserialize, Clone, Default)]
pub struct Lights {
    /// The color shown on both channels at startup, as a hex string.
    default_color: Option<String>,

    /// Transition timings. Presence enables transitions.
    transitions: Option<Transitions>,
}

/// A YAML representation of the transition timings.
#[derive(Deserialize, Clone)]
pub struct Transitions {
    /// How long to wait between interpolation steps.
    refresh_interval: Option<String>,

    /// The total length of a transition.
    duration: Option<String>,
}

impl Lights {
    /// Loads a lights configuration from a YAML file.
    pub fn from_file(path: &Path) -> Result<Lights, ConfigError> {
        Ok(serde_yml::from_str(&fs::read_to_string(path)?)?)
    }

    /// Gets the startup color. Defaults to off.
    pub fn default_color(&self) -> Result<Color, ConfigError> {
        self.default_color
            .as_ref()
            .map_or(Ok(Color::OFF), |hex| Ok(Color::from_hex(hex)?))
    }

    /// Gets the transition timings, or None if transitions are disabled.
    pub fn timings(&self) -> Result<Option<Timings>, ConfigError> {
        let transitions = match &self.transitions {
            Some(transitions) => transitions,
            None => return Ok(None),
        };

        Ok(Some(Timings::new(
            parse_duration(
                transitions.refresh_interval.as_ref(),
                DEFAULT_TRANSITION_REFRESH_INTERVAL,
            )?,
            parse_duration(transitions.duration.as_ref(), DEFAULT_TRANSITION_DURATION)?,
        )))
    }

    /// Builds a handler for the given device from this configuration.
    pub fn handler(&self, device: Arc<dyn duty::Device>) -> Result<Handler, ConfigError> {
        let default_color = self.default_color()?;
        Ok(match self.timings()? {
            Some(timings) => Handler::with_transitions(default_color, device, timings),
            None => Handler::new(default_color, device),
        })
    }
}

fn parse_duration(value: Option<&String>, default: Duration) -> Result<Duration, ConfigError> {
    value.map_or(Ok(default), |duration| {
        Ok(DurationString::from_string(duration.clone())?.into())
    })
}

#[cfg(test)]
mod test {
    use std::io::Write;
    use std::time::Duration;

    use crate::color::Color;

    use super::{Lights, DEFAULT_TRANSITION_DURATION, DEFAULT_TRANSITION_REFRESH_INTERVAL};

    #[test]
    fn test_defaults() {
        let config: Lights = serde_yml::from_str("{}").expect("expected a config");
        assert_eq!(
            config.default_color().expect("expected a color"),
            Color::OFF
        );
        assert!(config.timings().expect("expected timings").is_none());
    }

    #[test]
    fn test_full_config() {
        let config: Lights = serde_yml::from_str(
            r##"
            default_color: "#0000FF"
            transitions:
              refresh_interval: 10ms
              duration: 100ms
            "##,
        )
        .expect("expected a config");

        assert_eq!(
            config.default_color().expect("expected a color"),
            Color::new(0.0, 0.0, 1.0, 0.0)
        );

        let timings = config
            .timings()
            .expect("expected timings")
            .expect("expected transitions to be enabled");
        assert_eq!(timings.refresh_interval(), Duration::from_millis(10));
        assert_eq!(timings.duration(), Duration::from_millis(100));
        assert_eq!(timings.steps(), 10);
    }

    #[test]
    fn test_transition_defaults() {
        let config: Lights = serde_yml::from_str("transitions: {}").expect("expected a config");

        let timings = config
            .timings()
            .expect("expected timings")
            .expect("expected transitions to be enabled");
        assert_eq!(
            timings.refresh_interval(),
            DEFAULT_TRANSITION_REFRESH_INTERVAL
        );
        assert_eq!(timings.duration(), DEFAULT_TRANSITION_DURATION);
    }

    #[test]
    fn test_invalid_color() {
        let config: Lights =
            serde_yml::from_str("default_color: '#NOTHEX'").expect("expected a config");
        assert!(config.default_color().is_err());
    }

    #[test]
    fn test_invalid_duration() {
        let config: Lights = serde_yml::from_str(
            r#"
            transitions:
              duration: wat
            "#,
        )
        .expect("expected a config");
        assert!(config.timings().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("expected a temp file");
        write!(
            file,
            "default_color: \"#FF0000\"\ntransitions:\n  duration: 300ms\n"
        )
        .expect("expected to write the config");

        let config = Lights::from_file(file.path()).expect("expected a config");
        assert_eq!(
            config.default_color().expect("expected a color"),
            Color::new(1.0, 0.0, 0.0, 0.0)
        );
        assert_eq!(
            config
                .timings()
                .expect("expected timings")
                .expect("expected transitions to be enabled")
                .duration(),
            Duration::from_millis(300)
        );
    }
}
