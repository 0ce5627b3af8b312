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

use std::{
    cmp,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::{
    color::Color,
    duty,
    pattern::{Constant, Pattern},
    transition::{Fade, Timings},
};

/// The minimum tick interval. A pattern reporting a zero refresh interval
/// would otherwise spin the refresh loop.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_millis(1);

/// The light handler. Owns the active left/right patterns, runs the refresh
/// loop on a background thread and fades between patterns on replacement when
/// transitions are enabled.
pub struct Handler {
    state: Arc<Mutex<State>>,
    device: Arc<dyn duty::Device>,
    timings: Option<Timings>,
    running: Arc<AtomicBool>,
    join_handle: Option<JoinHandle<()>>,
}

/// The shared pattern state. A single lock protects both patterns and the
/// dirty flag, so the refresh loop never observes a half-replaced pair.
struct State {
    left: Box<dyn Pattern>,
    right: Box<dyn Pattern>,
    changed: bool,
}

impl Handler {
    /// Creates a new handler with transitions disabled. Colors snap to
    /// whatever a newly installed pattern reports.
    pub fn new(default_color: Color, device: Arc<dyn duty::Device>) -> Handler {
        Self::create(default_color, device, None)
    }

    /// Creates a new handler that fades into newly installed patterns using
    /// the given timings.
    pub fn with_transitions(
        default_color: Color,
        device: Arc<dyn duty::Device>,
        timings: Timings,
    ) -> Handler {
        Self::create(default_color, device, Some(timings))
    }

    fn create(
        default_color: Color,
        device: Arc<dyn duty::Device>,
        timings: Option<Timings>,
    ) -> Handler {
        Handler {
            state: Arc::new(Mutex::new(State {
                left: Box::new(Constant::new(default_color)),
                right: Box::new(Constant::new(default_color)),
                changed: false,
            })),
            device,
            timings,
            running: Arc::new(AtomicBool::new(false)),
            join_handle: None,
        }
    }

    /// Replaces the left pattern with a clone of the given pattern. May block
    /// for the remainder of an in-progress transition.
    pub fn set_left(&self, pattern: &dyn Pattern) {
        let mut state = self.state.lock();
        state.left = pattern.clone_pattern();
        state.changed = true;
        debug!("Replaced the left pattern.");
    }

    /// Replaces the right pattern with a clone of the given pattern. May block
    /// for the remainder of an in-progress transition.
    pub fn set_right(&self, pattern: &dyn Pattern) {
        let mut state = self.state.lock();
        state.right = pattern.clone_pattern();
        state.changed = true;
        debug!("Replaced the right pattern.");
    }

    /// Replaces both patterns with independent clones of the given pattern.
    /// May block for the remainder of an in-progress transition.
    pub fn set_both(&self, pattern: &dyn Pattern) {
        let mut state = self.state.lock();
        state.left = pattern.clone_pattern();
        state.right = pattern.clone_pattern();
        state.changed = true;
        debug!("Replaced both patterns.");
    }

    /// Starts the refresh loop. Starting an already running handler is a
    /// no-op.
    pub fn start(&mut self) {
        if self.running.swap(true, Ordering::SeqCst) {
            return;
        }

        let state = self.state.clone();
        let device = self.device.clone();
        let timings = self.timings;
        let running = self.running.clone();
        self.join_handle = Some(thread::spawn(move || {
            Self::worker(&state, &device, timings, &running);
        }));

        info!(device = %self.device, "Light handler started.");
    }

    /// Stops the refresh loop and joins the background thread. Cooperative:
    /// waits out any sleep or transition already in progress. Stopping a
    /// stopped handler is a no-op.
    pub fn stop(&mut self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        if let Some(join_handle) = self.join_handle.take() {
            if join_handle.join().is_err() {
                error!("Error joining the light handler thread");
            }
        }

        info!("Light handler stopped.");
    }

    /// The refresh loop. Polls the patterns for the colors to be displayed
    /// and pushes them to the device, fading first whenever the patterns were
    /// replaced.
    fn worker(
        state: &Arc<Mutex<State>>,
        device: &Arc<dyn duty::Device>,
        timings: Option<Timings>,
        running: &Arc<AtomicBool>,
    ) {
        let mut displayed_left = Color::OFF;
        let mut displayed_right = Color::OFF;

        while running.load(Ordering::SeqCst) {
            let (color_left, color_right, interval);
            {
                let mut state = state.lock();

                if state.changed {
                    if let Some(timings) = timings {
                        // The fade runs with the lock held, so a replacement
                        // that lands mid-transition waits until it finishes.
                        Self::fade(
                            &state,
                            device,
                            timings,
                            &mut displayed_left,
                            &mut displayed_right,
                        );
                    }
                    state.changed = false;
                }

                // The fastest pattern determines the tick interval.
                interval = tick_interval(state.left.as_ref(), state.right.as_ref());
                color_left = state.left.color();
                color_right = state.right.color();
            }

            displayed_left = color_left;
            displayed_right = color_right;
            device.apply(color_left, color_right);

            spin_sleep::sleep(interval);
        }
    }

    /// Fades both channels from the last displayed colors to the patterns'
    /// current colors, pushing every interpolation step to the device.
    fn fade(
        state: &State,
        device: &Arc<dyn duty::Device>,
        timings: Timings,
        displayed_left: &mut Color,
        displayed_right: &mut Color,
    ) {
        let steps = timings.steps();
        if steps == 0 {
            // The refresh interval exceeds the duration; snap on the next
            // sample instead.
            return;
        }

        let left = Fade::new(*displayed_left, state.left.color(), steps);
        let right = Fade::new(*displayed_right, state.right.color(), steps);
        for (left, right) in left.zip(right) {
            device.apply(left, right);
            *displayed_left = left;
            *displayed_right = right;
            spin_sleep::sleep(timings.refresh_interval());
        }
    }
}

impl Drop for Handler {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The interval until the next sample, clamped so a misbehaving pattern
/// cannot spin the loop.
fn tick_interval(left: &dyn Pattern, right: &dyn Pattern) -> Duration {
    cmp::max(
        cmp::min(left.refresh_interval(), right.refresh_interval()),
        MIN_REFRESH_INTERVAL,
    )
}
