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

use std::f64::consts::TAU;
use std::time::{Duration, Instant};

use crate::color::Color;

use super::Pattern;

/// The resample interval for a pulsing color. Fast enough for the pulse to
/// look continuous at the periods we use.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(20);

/// A pattern that pulses a base color with a raised-cosine brightness curve.
/// The pulse starts dark, peaks at half the period and returns to dark.
#[derive(Debug, Clone, Copy)]
pub struct Pulse {
    base: Color,
    period: Duration,
    started: Instant,
}

impl Pulse {
    /// Creates a new pulsing pattern with the given base color and period.
    pub fn new(base: Color, period: Duration) -> Pulse {
        Pulse {
            base,
            period,
            started: Instant::now(),
        }
    }
}

impl Pattern for Pulse {
    fn color(&self) -> Color {
        let period = self.period.as_secs_f64();
        if period <= 0.0 {
            return self.base;
        }

        let elapsed = self.started.elapsed().as_secs_f64();
        let level = 0.5 - 0.5 * (elapsed / period * TAU).cos();
        self.base.scaled(level)
    }

    fn refresh_interval(&self) -> Duration {
        DEFAULT_REFRESH_INTERVAL
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

    use super::Pulse;

    #[test]
    fn test_pulse_starts_dark() {
        let pattern = Pulse::new(Color::new(1.0, 0.5, 0.0, 0.0), Duration::from_secs(60));

        // With a one minute period the brightness right after creation is
        // still negligible.
        let color = pattern.color();
        assert!(color.r < 0.01);
        assert!(color.g < 0.01);
    }

    #[test]
    fn test_pulse_stays_in_range() {
        let pattern = Pulse::new(Color::new(1.0, 1.0, 1.0, 1.0), Duration::from_millis(10));

        for _ in 0..100 {
            let color = pattern.color();
            for channel in color.channels() {
                assert!((0.0..=1.0).contains(&channel));
            }
            std::thread::sleep(Duration::from_millis(1));
        }
    }

    #[test]
    fn test_zero_period_falls_back_to_base() {
        let base = Color::new(0.2, 0.4, 0.6, 0.8);
        let pattern = Pulse::new(base, Duration::ZERO);
        assert_eq!(pattern.color(), base);
    }
}
