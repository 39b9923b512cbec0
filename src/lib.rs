//! Dot-matrix jump game (workspace facade crate).
//!
//! This package keeps one `tui_dotjump::{bridge,core,input,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use tui_dotjump_bridge as bridge;
pub use tui_dotjump_core as core;
pub use tui_dotjump_input as input;
pub use tui_dotjump_term as term;
pub use tui_dotjump_types as types;
