//! Mount/unmount state machine of a dialog.
//!
//! ```text
//! Closed --open--> Opening --fade in--> Open
//!    ^                ^  |                |
//!    |          open  |  +-----close------+
//!    |                |  v
//!    +--exit timer-- Closing
//! ```
//!
//! `Closing` keeps the tree mounted for [`FADE_DURATION`] so the exit fade can
//! play. Opening again while closing cancels the pending unmount.

use std::time::{Duration, Instant};

use super::timer::Timer;

/// Length of the enter and exit fades, and the delay before unmounting.
pub const FADE_DURATION: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Not mounted.
    #[default]
    Closed,
    /// Mounted and fading in.
    Opening,
    /// Mounted, steady.
    Open,
    /// Mounted and fading out; unmounts when the exit timer fires.
    Closing,
}

/// Side-effecting transitions reported to the owning dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Closed -> Opening`: the tree must be mounted.
    Mounted,
    /// `Closing -> Opening`: the pending unmount was cancelled.
    Reopened,
    /// `Opening -> Open`.
    Settled,
    /// `Opening/Open -> Closing`: the exit timer started.
    ExitStarted,
    /// `Closing -> Closed`: the tree must be unmounted.
    Unmounted,
}

#[derive(Debug, Default)]
pub struct Lifecycle {
    phase: Phase,
    phase_started: Option<Instant>,
    /// Fade level at the start of the current phase.
    fade_from: f32,
    exit_timer: Option<Timer>,
}

impl Lifecycle {
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn is_mounted(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    pub const fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Closing)
    }

    pub fn open(&mut self, now: Instant) -> Option<Transition> {
        let transition = match self.phase {
            Phase::Closed => Transition::Mounted,
            Phase::Closing => Transition::Reopened,
            Phase::Opening | Phase::Open => return None,
        };
        self.fade_from = self.fade(now);
        self.exit_timer = None;
        self.enter(Phase::Opening, now);
        Some(transition)
    }

    pub fn close(&mut self, now: Instant) -> Option<Transition> {
        if !matches!(self.phase, Phase::Opening | Phase::Open) {
            return None;
        }
        self.fade_from = self.fade(now);
        self.exit_timer = Some(Timer::start(now, FADE_DURATION));
        self.enter(Phase::Closing, now);
        Some(Transition::ExitStarted)
    }

    /// Advance time-driven transitions.
    pub fn poll(&mut self, now: Instant) -> Option<Transition> {
        match self.phase {
            Phase::Opening if self.fade(now) >= 1.0 => {
                self.fade_from = 1.0;
                self.enter(Phase::Open, now);
                Some(Transition::Settled)
            }
            Phase::Closing if Timer::fire(&mut self.exit_timer, now) => {
                self.reset();
                Some(Transition::Unmounted)
            }
            _ => None,
        }
    }

    /// Visibility in `[0.0, 1.0]` used to blend colors during the fades.
    pub fn fade(&self, now: Instant) -> f32 {
        let progress = self.phase_started.map_or(0.0, |started| {
            now.saturating_duration_since(started).as_secs_f32() / FADE_DURATION.as_secs_f32()
        });
        match self.phase {
            Phase::Closed => 0.0,
            Phase::Open => 1.0,
            Phase::Opening => (self.fade_from + progress).min(1.0),
            Phase::Closing => (self.fade_from - progress).max(0.0),
        }
    }

    /// Drop straight to `Closed`, cancelling the exit timer.
    pub fn reset(&mut self) {
        self.phase = Phase::Closed;
        self.phase_started = None;
        self.fade_from = 0.0;
        self.exit_timer = None;
    }

    fn enter(&mut self, phase: Phase, now: Instant) {
        self.phase = phase;
        self.phase_started = Some(now);
    }
}
