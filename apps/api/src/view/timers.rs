//! Background interval tasks driving the cursor and placeholder animations.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::debug;

use crate::view::blinker::BLINK_INTERVAL;
use crate::view::rotator::ROTATE_INTERVAL;
use crate::view::state::ViewState;

pub type SharedView = Arc<Mutex<ViewState>>;

/// Handles to the two animation tasks. Both are aborted on drop.
pub struct AnimationTimers {
    blinker: JoinHandle<()>,
    rotator: JoinHandle<()>,
}

impl Drop for AnimationTimers {
    fn drop(&mut self) {
        self.blinker.abort();
        self.rotator.abort();
    }
}

/// Starts the blinker (every 500ms) and the rotator (every 3000ms).
/// The rotator only advances while suggestions are visible.
pub fn spawn_animation_timers(view: SharedView) -> AnimationTimers {
    debug!(
        "Starting animation timers: blink={}ms rotate={}ms",
        BLINK_INTERVAL.as_millis(),
        ROTATE_INTERVAL.as_millis()
    );
    AnimationTimers {
        blinker: tokio::spawn(run_every(
            BLINK_INTERVAL,
            view.clone(),
            ViewState::tick_blinker,
        )),
        rotator: tokio::spawn(run_every(ROTATE_INTERVAL, view, ViewState::tick_rotator)),
    }
}

async fn run_every(period: Duration, view: SharedView, tick: fn(&mut ViewState)) {
    // First tick one full period after start, like setInterval.
    let mut interval = interval_at(Instant::now() + period, period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        interval.tick().await;
        let mut state = view.lock().await;
        tick(&mut state);
    }
}
