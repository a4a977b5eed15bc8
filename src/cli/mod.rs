//! Command-line arguments

use clap::Parser;

/// AI-powered README generator for GitHub repositories
#[derive(Parser, Debug)]
#[command(
    name = "readmegen",
    about = "AI-powered README generator for GitHub repositories",
    version,
    long_about = "readmegen serves an HTTP API that takes a GitHub repository URL, detects \
                  the project's technology stack from its manifests and languages, and \
                  generates a README.md with Gemini.\n\n\
                  Credentials are read from the environment: GITHUB_TOKEN (optional) and \
                  GEMINI_API_KEY (required for generation)."
)]
pub struct CliArgs {
    #[arg(
        short = 'p',
        long,
        value_name = "PORT",
        help = "Port to listen on (overrides READMEGEN_PORT)"
    )]
    pub port: Option<u16>,

    #[arg(long, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, help = "Verbose output (debug level logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}
