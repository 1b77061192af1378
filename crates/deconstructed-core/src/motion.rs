//! Motion presets.
//!
//! Transitions are described here and turned into CSS animation parameters.
//! The webview's own animation scheduler runs them; nothing waits on them.

use crate::counter::Direction;

/// Timing curves usable from CSS
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Easing {
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::EaseOut => "ease-out".to_string(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Damped spring, parameterised like the usual physics-based presets
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub const fn new(stiffness: f64, damping: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass: 1.0,
        }
    }

    /// Undamped angular frequency
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Seconds until the oscillation stays within ~2% of rest
    pub fn settling_time(&self) -> f64 {
        let omega = self.natural_frequency();
        let zeta = self.damping_ratio().max(f64::EPSILON);
        if zeta < 1.0 {
            4.0 / (zeta * omega)
        } else {
            // overdamped: the slow pole dominates
            let slow = omega * (zeta - (zeta * zeta - 1.0).sqrt());
            4.0 / slow.max(f64::EPSILON)
        }
    }
}

/// A transition the view can apply
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Transition {
    Spring(Spring),
    Tween { duration_ms: u32, easing: Easing },
}

impl Transition {
    pub fn duration_ms(&self) -> u32 {
        match self {
            Transition::Spring(spring) => (spring.settling_time() * 1000.0).round() as u32,
            Transition::Tween { duration_ms, .. } => *duration_ms,
        }
    }

    /// CSS easing; a spring is approximated by a gentle overshoot-free ease-out
    pub fn easing(&self) -> Easing {
        match self {
            Transition::Spring(_) => Easing::CubicBezier(0.22, 1.0, 0.36, 1.0),
            Transition::Tween { easing, .. } => *easing,
        }
    }

    /// `animation-duration` and `animation-timing-function` declarations
    pub fn css_declarations(&self) -> String {
        format!(
            "animation-duration: {}ms; animation-timing-function: {};",
            self.duration_ms(),
            self.easing().css()
        )
    }
}

/// Counter number slide: spring, stiffness 300, damping 30
pub const COUNTER_SPRING: Transition = Transition::Spring(Spring::new(300.0, 30.0));

/// Card reveal: 500ms ease-out
pub const CARD_REVEAL: Transition = Transition::Tween {
    duration_ms: 500,
    easing: Easing::EaseOut,
};

/// How far a revealed card travels upward
pub const CARD_REVEAL_OFFSET_PX: f64 = 20.0;

/// Fraction of a card that must be visible before it reveals
pub const CARD_REVEAL_THRESHOLD: f64 = 0.3;

/// Enter/center/exit offsets for a vertical slide
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SlideVariants {
    pub distance: f64,
}

/// The counter slides by the height of its number window
pub const COUNTER_SLIDE: SlideVariants = SlideVariants { distance: 64.0 };

impl SlideVariants {
    /// Where the incoming value starts
    pub fn enter(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Increased => self.distance,
            Direction::Decreased => -self.distance,
            Direction::None => 0.0,
        }
    }

    /// Where the outgoing value ends up
    pub fn exit(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Increased => -self.distance,
            Direction::Decreased => self.distance,
            Direction::None => 0.0,
        }
    }
}

/// Per-card latch so the reveal animation fires at most once
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an intersection; true only the first time the threshold is met
    pub fn observe(&mut self, visible_fraction: f64) -> bool {
        if self.revealed || visible_fraction.is_nan() || visible_fraction < CARD_REVEAL_THRESHOLD {
            return false;
        }
        self.revealed = true;
        true
    }
}
