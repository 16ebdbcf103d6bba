mod terminal_input;

pub use terminal_input::{TerminalInputEvent, TerminalInputListener};
