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

use crate::color::Color;

pub mod log;
pub mod mock;

/// A duty-cycle sink. Applies a pair of colors to the LED hardware. The
/// handler treats this as synchronous and non-failing.
pub trait Device: fmt::Display + Send + Sync {
    /// Applies the duty cycle pair to the left and right channels.
    fn apply(&self, left: Color, right: Color);
}

/// Gets a device that reports frames through the log instead of hardware.
pub fn log_device() -> Arc<dyn Device> {
    Arc::new(log::Device::get())
}
