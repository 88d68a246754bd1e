pub mod clipboard;
pub mod error;
pub mod export;
pub mod format;
pub mod interactive;
pub mod logging;
pub mod output;
pub mod pagination;
pub mod toast;

pub use clipboard::copy_to_clipboard;
pub use output::{print_success, print_warning, OutputStyle};
