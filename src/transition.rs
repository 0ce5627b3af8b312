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

/// Timing parameters for pattern transitions. Fixed at handler construction.
#[derive(Debug, Clone, Copy)]
pub struct Timings {
    refresh_interval: Duration,
    duration: Duration,
}

impl Timings {
    /// Creates new transition timings.
    pub fn new(refresh_interval: Duration, duration: Duration) -> Timings {
        Timings {
            refresh_interval,
            duration,
        }
    }

    /// How long to wait between interpolation steps.
    pub fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    /// The total length of a transition.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// The number of interpolation steps, truncated to a whole number. Zero
    /// means the transition should be skipped and the next sample snaps.
    pub fn steps(&self) -> u32 {
        let interval = self.refresh_interval.as_millis();
        if interval == 0 {
            return 0;
        }
        (self.duration.as_millis() / interval) as u32
    }
}

/// A linear interpolation between two colors. Yields exactly `steps` colors,
/// each channel clamped to the valid range to guard against floating point
/// overshoot. With clamped linear steps the sequence converges on the target,
/// so no final snap is applied.
#[derive(Debug, Clone)]
pub struct Fade {
    current: [f64; 4],
    delta: [f64; 4],
    remaining: u32,
}

impl Fade {
    /// Plans a fade from one color to another over the given number of steps.
    pub fn new(from: Color, to: Color, steps: u32) -> Fade {
        let from = from.channels();
        let to = to.channels();

        let mut delta = [0.0; 4];
        if steps > 0 {
            for (channel, delta) in delta.iter_mut().enumerate() {
                *delta = (to[channel] - from[channel]) / f64::from(steps);
            }
        }

        Fade {
            current: from,
            delta,
            remaining: steps,
        }
    }
}

impl Iterator for Fade {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        for (channel, delta) in self.delta.iter().enumerate() {
            self.current[channel] = (self.current[channel] + delta).clamp(0.0, 1.0);
        }

        Some(Color::from_channels(self.current))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Fade {}
