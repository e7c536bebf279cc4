mod countdown_vm;
mod theme_vm;

pub use countdown_vm::countdown_message;
pub use theme_vm::{Theme, made_by_line};
