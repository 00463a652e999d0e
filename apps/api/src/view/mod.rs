// Page state and its two animations. No I/O here apart from the timer tasks.

pub mod blinker;
pub mod handlers;
pub mod rotator;
pub mod state;
pub mod timers;
