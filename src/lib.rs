//! # lsystem-turtle
//!
//! Context-free L-System rewriting plus turtle interpretation into
//! engine-agnostic polygon strips.
//!
//! It decouples the *grammar* (symbol rewriting over an alphabet, axiom, and
//! per-symbol rules) from the *geometry* (a [`PolygonSet`] of vertices and
//! line strips) that a renderer, plotter, or mesher can ingest. A host
//! application supplies the iteration count and branching angle and displays
//! whatever comes back:
//!
//! ```
//! use lsystem_turtle::{LSystem, interpret};
//!
//! let mut sys = LSystem::new(); // the classic bracketed plant
//! let tree = sys.iterate(3)?.to_owned();
//! let geometry = interpret(&tree, 25.0)?;
//! assert!(geometry.polygon_count() > 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod grammar;
pub mod interpreter;
pub mod polygon;
pub mod turtle;

pub use grammar::*;
pub use interpreter::*;
pub use polygon::*;
pub use turtle::*;
