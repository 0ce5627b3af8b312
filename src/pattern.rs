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

pub mod constant;
pub mod pulse;

pub use constant::Constant;
pub use pulse::Pulse;

/// A generator of a time-varying color. The handler samples patterns from its
/// refresh loop, so `color` must return in bounded, negligible time.
pub trait Pattern: Send {
    /// The color the pattern wants displayed right now.
    fn color(&self) -> Color;

    /// How often the pattern should be resampled. Must be positive; the
    /// handler clamps unreasonable values to a safe minimum.
    fn refresh_interval(&self) -> Duration;

    /// Clones the pattern. The handler keeps patterns alive beyond the
    /// caller's ownership, so the clone must not alias any internal state.
    fn clone_pattern(&self) -> Box<dyn Pattern>;
}

#[cfg(test)]
mod test {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use crate::color::Color;

    use super::{Constant, Pattern};

    /// A test pattern whose color steps up on every sample.
    struct Ramp {
        samples: Arc<AtomicU32>,
    }

    impl Ramp {
        fn new() -> Ramp {
            Ramp {
                samples: Arc::new(AtomicU32::new(0)),
            }
        }
    }

    impl Pattern for Ramp {
        fn color(&self) -> Color {
            let sample = self.samples.fetch_add(1, Ordering::SeqCst);
            Color::new(f64::from(sample) * 0.01, 0.0, 0.0, 0.0)
        }

        fn refresh_interval(&self) -> Duration {
            Duration::from_millis(5)
        }

        fn clone_pattern(&self) -> Box<dyn Pattern> {
            Box::new(Ramp {
                samples: Arc::new(AtomicU32::new(self.samples.load(Ordering::SeqCst))),
            })
        }
    }

    #[test]
    fn test_clone_does_not_alias_state() {
        let original = Ramp::new();
        let clone = original.clone_pattern();

        // Advance the original a few times. The clone must be unaffected.
        original.color();
        original.color();
        original.color();

        assert_eq!(clone.color(), Color::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(original.color(), Color::new(0.03, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_constant_clone_is_independent() {
        let original = Constant::new(Color::new(0.5, 0.0, 0.0, 0.0));
        let clone = original.clone_pattern();
        drop(original);

        assert_eq!(clone.color(), Color::new(0.5, 0.0, 0.0, 0.0));
    }
}
