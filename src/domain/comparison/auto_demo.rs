// SPDX-License-Identifier: MPL-2.0
//! One-shot reveal animation.
//!
//! The demo sweeps the divider from the center to the right edge, holds,
//! then sweeps back to the center. It runs at most once per widget lifetime
//! and is driven by a single periodic tick.

use crate::domain::ui::{DemoTiming, DividerPercent};
use std::time::Instant;

/// Animation phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the widget to become visible.
    Idle,
    /// Moving right by one step per tick.
    SweepRight,
    /// Holding at the right edge.
    Pause { since: Instant },
    /// Moving back toward the center by one step per tick.
    SweepBack,
    /// Finished or cancelled. Terminal.
    Done,
}

/// Auto-demo state machine.
#[derive(Debug, Clone)]
pub struct AutoDemo {
    enabled: bool,
    timing: DemoTiming,
    phase: Phase,
    played: bool,
}

impl AutoDemo {
    #[must_use]
    pub fn new(enabled: bool, timing: DemoTiming) -> Self {
        Self {
            enabled,
            timing,
            phase: Phase::Idle,
            played: false,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn timing(&self) -> DemoTiming {
        self.timing
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the demo has started at least once (or was cancelled before
    /// it could). Never reverts to `false`.
    #[must_use]
    pub fn has_played(&self) -> bool {
        self.played
    }

    /// Whether ticks are currently needed.
    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(
            self.phase,
            Phase::SweepRight | Phase::Pause { .. } | Phase::SweepBack
        )
    }

    /// Starts the sweep if the demo is enabled and has never played.
    ///
    /// Returns the starting position when the demo actually started.
    pub fn trigger(&mut self) -> Option<DividerPercent> {
        if !self.enabled || self.played || self.phase != Phase::Idle {
            return None;
        }
        self.played = true;
        self.phase = Phase::SweepRight;
        Some(DividerPercent::CENTER)
    }

    /// Advances the animation by one tick.
    ///
    /// Returns the new divider position, or `None` when the divider does not
    /// move on this tick.
    pub fn tick(&mut self, now: Instant, position: DividerPercent) -> Option<DividerPercent> {
        let step = self.timing.step_percent();
        match self.phase {
            Phase::Idle | Phase::Done => None,
            Phase::SweepRight => {
                let next = position.value() + step;
                if next >= DividerPercent::MAX.value() {
                    self.phase = Phase::Pause { since: now };
                    Some(DividerPercent::MAX)
                } else {
                    Some(DividerPercent::new(next))
                }
            }
            Phase::Pause { since } => {
                if now.saturating_duration_since(since) >= self.timing.pause() {
                    self.phase = Phase::SweepBack;
                }
                None
            }
            Phase::SweepBack => {
                let next = position.value() - step;
                if next <= DividerPercent::CENTER.value() {
                    self.phase = Phase::Done;
                    Some(DividerPercent::CENTER)
                } else {
                    Some(DividerPercent::new(next))
                }
            }
        }
    }

    /// Stops the demo for good, whatever phase it is in.
    ///
    /// Returns whether an in-flight animation was interrupted.
    pub fn cancel(&mut self) -> bool {
        let interrupted = self.is_running();
        self.phase = Phase::Done;
        self.played = true;
        interrupted
    }
}
