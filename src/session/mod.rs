mod buffer;
mod cursor;
mod mode;
mod session;
mod tabs;

pub use buffer::Buffer;
pub use cursor::Cursor;
pub use mode::{Mode, PromptKind};
pub use session::Session;
pub use tabs::{Tab, TabRegistry};
