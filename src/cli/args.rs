use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "podcast-forge")]
#[command(about = "Generate podcast transcripts with a hosted LLM", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Run the web server (default)
    Serve(ServeCliArgs),
    /// Generate a single podcast transcript from the command line
    Generate(GenerateCliArgs),
    /// Print the resolved configuration with secrets redacted
    Config,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug, Default)]
pub struct ServeCliArgs {
    /// Address to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,
    /// Port to listen on (overrides server.port)
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateCliArgs {
    /// Podcast topic
    #[arg(short, long)]
    pub topic: String,
    /// Name of the podcast host
    #[arg(long)]
    pub podcaster_name: Option<String>,
    /// Name of the guest
    #[arg(long)]
    pub guest_name: Option<String>,
    /// Language the conversation is written in
    #[arg(short, long)]
    pub language: Option<String>,
    /// Also render the transcript to this PDF file
    #[arg(long)]
    pub pdf: Option<PathBuf>,
    /// Print the model output without converting markdown to HTML
    #[arg(long, conflicts_with = "pdf")]
    pub raw: bool,
}
