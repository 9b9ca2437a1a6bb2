mod edge;
mod path;
mod rect;

pub use edge::{CaretEdge, EdgeFrame};
pub use path::{Path, PathCommand};
pub use rect::Rect;
