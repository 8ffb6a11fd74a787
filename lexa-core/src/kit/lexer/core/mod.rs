pub mod cursor;
pub mod position;

pub use cursor::Cursor;
pub use position::SourcePosition;
