use anyhow::Result;
use clap::Parser;
use podcast_forge::{
    app::{self, ServeOptions},
    cli::{handle_config_command, handle_generate_command, Cli, CliCommand},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(CliCommand::Version) => {
            println!("podcast-forge {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(CliCommand::Config) => handle_config_command(),
        Some(CliCommand::Generate(args)) => handle_generate_command(args).await,
        Some(CliCommand::Serve(args)) => {
            app::run_service(ServeOptions {
                host: args.host,
                port: args.port,
            })
            .await
        }
        None => app::run_service(ServeOptions::default()).await,
    }
}
