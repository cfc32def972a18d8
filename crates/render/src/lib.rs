//! doomguy-status-render: sprite loading and Cairo painting.

mod paint;
mod sprites;

pub use paint::{canvas_scale, paint_frame};
pub use sprites::SpriteCatalogue;
