//! Turtle cursor state and the drawing vocabulary.

use std::f32::consts::FRAC_PI_2;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Distance covered by one `F` step, in world units.
///
/// A design constant of the drawing vocabulary, not a caller knob; scale the
/// resulting geometry instead if a different footprint is needed.
pub const STEP_LENGTH: f32 = 0.2;

/// The drawing cursor: a position in the plane and a heading angle.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtleState {
    /// Current position of the cursor.
    pub position: Vec2,

    /// Current heading in radians, measured counter-clockwise from +X.
    pub heading: f32,
}

impl Default for TurtleState {
    /// Origin, heading straight up (+Y).
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: FRAC_PI_2,
        }
    }
}

impl TurtleState {
    /// Moves `step` units along the current heading.
    pub fn advance(&mut self, step: f32) {
        self.position += Vec2::from_angle(self.heading) * step;
    }

    /// Rotates the heading by `delta` radians (positive is counter-clockwise).
    pub fn turn(&mut self, delta: f32) {
        self.heading += delta;
    }
}

/// Operations the turtle can perform, one per drawing symbol.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Advance one [`STEP_LENGTH`] and emit a vertex (`F`).
    Forward,
    /// Rotate the heading; the factor signs the turn angle (`+` / `-`).
    Turn(f32),
    /// Save the cursor and open a branch polygon (`[`).
    Push,
    /// Close the branch polygon and restore the saved cursor (`]`).
    Pop,
    /// No geometric effect.
    Ignore,
}

impl TurtleOp {
    /// Classifies a symbol of the generation string.
    ///
    /// Symbols outside the drawing vocabulary are [`TurtleOp::Ignore`], so
    /// grammars are free to carry bookkeeping symbols that never draw.
    pub fn for_symbol(sym: char) -> Self {
        match sym {
            'F' => Self::Forward,
            '+' => Self::Turn(1.0),
            '-' => Self::Turn(-1.0),
            '[' => Self::Push,
            ']' => Self::Pop,
            _ => Self::Ignore,
        }
    }
}
