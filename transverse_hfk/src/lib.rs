//! Combinatorial decision procedures for null-homologous generators in grid
//! Floer homology.
//!
//! A grid diagram (a pair of permutations marking X- and O-decorations on an
//! N-by-N torus) generates, lazily, a bipartite directed graph whose vertices
//! are grid states and whose edges record "empty rectangle" moves between
//! them. [`decision::null_homologous_d0q`], [`decision::null_homologous_d1q`]
//! and [`decision::null_homologous_lift`] build that graph layer by layer and
//! contract it modulo 2 ([`reduce`]) until a designated generator either
//! vanishes or becomes unreachable, deciding whether it is a boundary.

pub mod arith;
pub mod decision;
pub mod driver;
pub mod edges;
pub mod error;
pub mod grid;
pub mod lift;
pub mod printing;
pub mod rectangles;
pub mod reduce;
pub mod state;
pub mod verbosity;

pub use decision::{null_homologous_d0q, null_homologous_d1q, null_homologous_lift};
pub use error::GridError;
pub use grid::Grid;
pub use lift::{LiftGrid, LiftState};
pub use state::State;
pub use verbosity::Verbosity;
