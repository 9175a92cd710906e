//! Terminal client layer: list rendering, message printing, styles.
//! Everything that assumes a terminal lives here, behind the
//! [`crate::surface::Surface`] seam.

pub mod print;
pub mod render;
pub mod styles;
