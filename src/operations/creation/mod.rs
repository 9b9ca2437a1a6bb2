mod caret;
mod make_bubble;

pub use caret::{
    is_clear_of_corners, resolve_base_center, CaretGeometry, CaretOutcome, TipRounding,
};
pub use make_bubble::{build, BubbleOutline, MakeBubble};
