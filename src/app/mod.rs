pub mod session;
pub mod terminal;

pub use session::{parse_command, Command, Session};
pub use terminal::TerminalView;
