mod args;
mod config;
mod generate;

pub use args::{Cli, CliCommand, GenerateCliArgs, ServeCliArgs};
pub use config::handle_config_command;
pub use generate::handle_generate_command;
