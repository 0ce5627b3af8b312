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

use tracing::debug;

use crate::color::Color;

/// A device that writes duty cycle pairs to the log. Useful for previewing
/// patterns on machines without LED hardware attached.
pub struct Device {}

impl Device {
    /// Gets the logging device.
    pub fn get() -> Device {
        Device {}
    }
}

impl crate::duty::Device for Device {
    fn apply(&self, left: Color, right: Color) {
        debug!(left = %left, right = %right, "Applying duty cycle pair.");
    }
}

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "log")
    }
}
