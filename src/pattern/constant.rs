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

use std::time::Duration;

use crate::color::Color;

use super::Pattern;

/// The default resample interval for a constant color. The color never
/// changes, so there is no point in sampling it quickly.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(50);

/// A pattern that displays a single fixed color.
#[derive(Debug, Clone, Copy)]
pub struct Constant {
    color: Color,
    refresh_interval: Duration,
}

impl Constant {
    /// Creates a new constant color pattern.
    pub fn new(color: Color) -> Constant {
        Constant {
            color,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Creates a new constant color pattern with a specific resample interval.
    pub fn with_refresh_interval(color: Color, refresh_interval: Duration) -> Constant {
        Constant {
            color,
            refresh_interval,
        }
    }
}

impl Pattern for Constant {
    fn color(&self) -> Color {
        self.color
    }

    fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    fn clone_pattern(&self) -> Box<dyn Pattern> {
        Box::new(*self)
    }
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use crate::color::Color;
    use crate::pattern::Pattern;

    use super::{Constant, DEFAULT_REFRESH_INTERVAL};

    #[test]
    fn test_constant_color() {
        let pattern = Constant::new(Color::new(0.25, 0.5, 0.75, 1.0));
        assert_eq!(pattern.color(), Color::new(0.25, 0.5, 0.75, 1.0));
        assert_eq!(pattern.color(), pattern.color());
        assert_eq!(pattern.refresh_interval(), DEFAULT_REFRESH_INTERVAL);
    }

    #[test]
    fn test_custom_refresh_interval() {
        let pattern =
            Constant::with_refresh_interval(Color::OFF, Duration::from_millis(20));
        assert_eq!(pattern.refresh_interval(), Duration::from_millis(20));
    }
}
