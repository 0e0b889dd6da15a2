//! # DMPLKit DM/PL
//!
//! Generates programs in the plotter's native DM/PL command language.
//!
//! A compiled program is a header selecting the measuring unit, the
//! comma-separated command tokens in call order and a finalizer:
//!
//! ```text
//! ;: ECM,U H L0,A100,100,R,U,P0;,D,-1984,1337,e
//! ```

pub mod dmpl_gen;

pub use dmpl_gen::DmplBuilder;
pub use dmplkit_core::{PlotBuilder, PlotError};
