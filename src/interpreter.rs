//! Interpreter that converts a generation string into a [`PolygonSet`].
//!
//! The entry point is [`interpret`]. Feed it the string produced by
//! [`LSystem::iterate`](crate::grammar::LSystem::iterate) together with the
//! branching angle, and it walks the string with a turtle cursor, emitting
//! one polygon per trunk/branch.

use std::mem;

use glam::Vec3;
use thiserror::Error;
use tracing::debug;

use crate::polygon::{PolygonSet, VertexId};
use crate::turtle::{STEP_LENGTH, TurtleOp, TurtleState};

/// Starting capacity for each polygon's index list. Lists beyond this grow
/// geometrically, keeping appends amortized O(1).
const DEF_POLYGON_CAP: usize = 50;

/// A `]` appeared with no open branch to close.
///
/// The grammar is assumed to produce balanced brackets; an unbalanced string
/// means a broken rule set, and partial geometry would misrepresent the
/// structure, so interpretation aborts with no output.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("unbalanced ']' at byte {index}: no open branch")]
pub struct UnbalancedBracket {
    /// Byte offset of the offending symbol in the generation string.
    pub index: usize,
}

/// Everything saved on `[` and restored on `]`.
///
/// One record per branch level: the cursor, the suspended parent polygon, and
/// the vertex the branch hangs off. The parent polygon cannot grow while the
/// branch is open, so its length needs no separate bookkeeping.
struct BranchFrame {
    turtle: TurtleState,
    polygon: Vec<VertexId>,
    vertex: VertexId,
}

/// Walks `tree` with a turtle cursor and returns the resulting geometry.
///
/// `angle_degrees` is the turn magnitude applied by `+` and `-`; conversion
/// to radians happens here, callers pass the unit their UI deals in. The
/// cursor starts at the origin heading straight up, with a seed vertex
/// already emitted and the trunk polygon open on it.
///
/// Symbol semantics:
///
/// | symbol | effect |
/// |---|---|
/// | `F` | advance [`STEP_LENGTH`], emit a vertex, append it to the open polygon |
/// | `+` | turn counter-clockwise by the angle |
/// | `-` | turn clockwise by the angle |
/// | `[` | save the cursor; open a branch polygon seeded with the current vertex |
/// | `]` | finalize the branch polygon; restore the cursor and parent polygon |
/// | other | ignored |
///
/// Exactly one polygon is open at any point of the scan. Closing `]` resumes
/// the parent at the branch point, not at the branch tip: the parent's next
/// `F` continues from where the branch was attached. After the scan the open
/// polygon is finalized; frames left by unclosed `[` are dropped, so for a
/// balanced string the output holds `1 + count('[')` polygons.
///
/// Runs in O(`tree.len()`) time with O(branch depth) auxiliary space.
///
/// # Errors
/// Returns [`UnbalancedBracket`] on a `]` with no open branch. No partial
/// geometry is produced.
pub fn interpret(tree: &str, angle_degrees: f32) -> Result<PolygonSet, UnbalancedBracket> {
    let delta = angle_degrees.to_radians();

    let mut set = PolygonSet::new();
    let mut turtle = TurtleState::default();
    let mut stack: Vec<BranchFrame> = Vec::new();

    let mut vertex = set.add_vertex(Vec3::new(turtle.position.x, turtle.position.y, 0.0));
    let mut polygon = Vec::with_capacity(DEF_POLYGON_CAP);
    polygon.push(vertex);

    for (index, sym) in tree.char_indices() {
        match TurtleOp::for_symbol(sym) {
            TurtleOp::Forward => {
                turtle.advance(STEP_LENGTH);
                vertex = set.add_vertex(Vec3::new(turtle.position.x, turtle.position.y, 0.0));
                polygon.push(vertex);
            }
            TurtleOp::Turn(sign) => turtle.turn(sign * delta),
            TurtleOp::Push => {
                stack.push(BranchFrame {
                    turtle,
                    polygon: mem::take(&mut polygon),
                    vertex,
                });
                polygon.reserve(DEF_POLYGON_CAP);
                polygon.push(vertex);
            }
            TurtleOp::Pop => {
                let frame = stack.pop().ok_or(UnbalancedBracket { index })?;
                set.add_polygon(mem::replace(&mut polygon, frame.polygon));
                turtle = frame.turtle;
                vertex = frame.vertex;
            }
            TurtleOp::Ignore => {}
        }
    }
    set.add_polygon(polygon);

    debug!(
        vertices = set.vertex_count(),
        polygons = set.polygon_count(),
        "interpreted generation string"
    );
    Ok(set)
}
