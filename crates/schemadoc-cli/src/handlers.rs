//! Command handlers for CLI subcommands
//!
//! Each subcommand lives in its own module; shared loading helpers are in
//! `utils`.

mod completions;
mod inspect;
mod render;
mod themes;
mod utils;

pub use completions::handle_completions;
pub use inspect::handle_inspect;
pub use render::handle_render;
pub use themes::handle_themes;
