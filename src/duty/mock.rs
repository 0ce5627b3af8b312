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

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::color::Color;

/// A mock device. Records every applied duty cycle pair so tests can assert
/// on the exact frame sequence.
#[derive(Clone, Default)]
pub struct Device {
    frames: Arc<Mutex<Vec<(Color, Color)>>>,
}

impl Device {
    /// Gets a new mock device.
    pub fn get() -> Device {
        Device::default()
    }

    /// Returns a copy of all frames applied so far.
    pub fn frames(&self) -> Vec<(Color, Color)> {
        self.frames.lock().clone()
    }

    /// Returns the most recently applied frame.
    pub fn last_frame(&self) -> Option<(Color, Color)> {
        self.frames.lock().last().copied()
    }
}

impl crate::duty::Device for Device {
    fn apply(&self, left: Color, right: Color) {
        self.frames.lock().push((left, right));
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mock")
    }
}
