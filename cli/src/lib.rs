pub mod config;
pub mod render;
pub mod shell;

pub use config::{Cli, Commands, CorpusArgs};
pub use render::Format;
pub use shell::Shell;
