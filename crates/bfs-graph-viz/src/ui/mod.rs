//! UI components for the graph visualization.
//!
//! This module contains rendering functions for overlays and widgets.

mod overlays;

pub use overlays::{draw_footer, draw_instruction, draw_sidebar_toggle, FOOTER_TEXT};
