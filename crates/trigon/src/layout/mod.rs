//! Drawing-surface helpers: viewport fitting and label placement.

mod labels;
mod scale;

pub use labels::{angle_label_anchor, vertex_label_anchor};
pub use scale::{fit_transform, scale_to_fit, Fit, Viewport};
