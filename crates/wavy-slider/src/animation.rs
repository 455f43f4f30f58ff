//! Phase accumulation and scalar transitions
//!
//! The wave's motion is a single scalar phase advanced once per display
//! frame; gap size and thumb scale are smoothed scalars driven by the same
//! tick. Both live as explicit fields on the slider state and are stepped by
//! whoever owns the frame subscription, never by ambient timers.

use std::f32::consts::PI;

/// Phase wrap cycle: 20 pi
///
/// Wrapping keeps the accumulator small, so floating precision never
/// degrades no matter how long the animation runs. Any multiple of 2 pi is
/// transparent to the wave samplers.
pub const PHASE_CYCLE: f32 = 20.0 * PI;

/// The wave phase accumulator
///
/// One per slider instance, advanced by a signed delta each tick and
/// wrapped into `(-PHASE_CYCLE, PHASE_CYCLE)` with a sign-preserving
/// remainder, so both travel directions stay bounded.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Phase {
    value: f32,
}

impl Phase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase in radians
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advance by `delta` radians (negative = leftward travel)
    pub fn advance(&mut self, delta: f32) {
        self.value = (self.value + delta) % PHASE_CYCLE;
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

/// How a [`Transition`] approaches its target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionMode {
    /// Damped spring integrated with semi-implicit Euler
    Spring {
        damping: f32,
        stiffness: f32,
        mass: f32,
    },
    /// Constant-rate approach over a fixed duration
    Timing { duration_ms: f32 },
}

/// Settle threshold: position and velocity within this of the target snap
const SETTLE_EPSILON: f32 = 1e-3;

/// A smoothed scalar (gap size, thumb scale)
///
/// `retarget` starts a transition toward a new value; `set` jumps there
/// immediately with no interpolation (the non-animated gap case). `step`
/// advances by `dt` seconds and reports whether the value is still moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    current: f32,
    target: f32,
    velocity: f32,
    /// Signed rate for timing mode, fixed when the transition starts
    rate: f32,
    mode: TransitionMode,
}

impl Transition {
    pub fn new(initial: f32, mode: TransitionMode) -> Self {
        Self {
            current: initial,
            target: initial,
            velocity: 0.0,
            rate: 0.0,
            mode,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Jump to `value` immediately, cancelling any transition in flight
    pub fn set(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.velocity = 0.0;
        self.rate = 0.0;
    }

    /// Begin moving toward `target`
    pub fn retarget(&mut self, target: f32) {
        self.target = target;
        if let TransitionMode::Timing { duration_ms } = self.mode {
            self.rate = if duration_ms > 0.0 {
                (target - self.current) / (duration_ms / 1000.0)
            } else {
                0.0
            };
            if duration_ms <= 0.0 {
                self.current = target;
            }
        }
    }

    /// Advance by `dt` seconds; returns true while still settling
    pub fn step(&mut self, dt: f32) -> bool {
        if self.current == self.target && self.velocity == 0.0 {
            return false;
        }

        match self.mode {
            TransitionMode::Spring {
                damping,
                stiffness,
                mass,
            } => {
                let mass = mass.max(1e-3);
                let accel = (stiffness * (self.target - self.current) - damping * self.velocity)
                    / mass;
                self.velocity += accel * dt;
                self.current += self.velocity * dt;

                if (self.current - self.target).abs() < SETTLE_EPSILON
                    && self.velocity.abs() < SETTLE_EPSILON
                {
                    self.set(self.target);
                    return false;
                }
            }
            TransitionMode::Timing { .. } => {
                let next = self.current + self.rate * dt;
                // Stop on arrival, whichever direction we came from
                let arrived = (self.rate >= 0.0 && next >= self.target)
                    || (self.rate < 0.0 && next <= self.target);
                if arrived || self.rate == 0.0 {
                    self.set(self.target);
                    return false;
                }
                self.current = next;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_wraps_positive() {
        let mut phase = Phase::new();
        let delta = 0.08;
        let ticks = 3000;
        for _ in 0..ticks {
            phase.advance(delta);
        }
        let expected = (ticks as f32 * delta) % PHASE_CYCLE;
        assert!((phase.value() - expected).abs() < 0.05);
        assert!(phase.value().abs() < PHASE_CYCLE);
    }

    #[test]
    fn test_phase_wraps_negative() {
        let mut phase = Phase::new();
        let delta = -0.05;
        let ticks = 5000;
        for _ in 0..ticks {
            phase.advance(delta);
        }
        let expected = (ticks as f32 * delta) % PHASE_CYCLE;
        assert!((phase.value() - expected).abs() < 0.05);
        assert!(phase.value() > -PHASE_CYCLE);
    }

    #[test]
    fn test_phase_direction_reversal() {
        let mut phase = Phase::new();
        for _ in 0..100 {
            phase.advance(0.1);
        }
        for _ in 0..100 {
            phase.advance(-0.1);
        }
        assert!(phase.value().abs() < 1e-4);
    }

    #[test]
    fn test_timing_transition_reaches_target() {
        let mut t = Transition::new(0.0, TransitionMode::Timing { duration_ms: 150.0 });
        t.retarget(12.0);
        // halfway through the duration
        assert!(t.step(0.075));
        assert!((t.value() - 6.0).abs() < 1e-3);
        // overshoot is clamped to the target
        assert!(!t.step(1.0));
        assert_eq!(t.value(), 12.0);
    }

    #[test]
    fn test_timing_transition_downward() {
        let mut t = Transition::new(12.0, TransitionMode::Timing { duration_ms: 100.0 });
        t.retarget(0.0);
        t.step(0.05);
        assert!((t.value() - 6.0).abs() < 1e-3);
        t.step(0.2);
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_spring_transition_settles() {
        let mut t = Transition::new(
            0.0,
            TransitionMode::Spring {
                damping: 15.0,
                stiffness: 150.0,
                mass: 1.0,
            },
        );
        t.retarget(12.0);
        // 4 simulated seconds at 120 Hz is plenty for these parameters
        for _ in 0..480 {
            if !t.step(1.0 / 120.0) {
                break;
            }
        }
        assert_eq!(t.value(), 12.0);
    }

    #[test]
    fn test_set_is_immediate() {
        let mut t = Transition::new(0.0, TransitionMode::Timing { duration_ms: 500.0 });
        t.set(12.0);
        assert_eq!(t.value(), 12.0);
        assert!(!t.step(0.016));
    }
}
