use clap::Parser;
use tracing_subscriber::EnvFilter;

use roadmap::{generate, Options, RepoName};

/// Generate a markdown roadmap from the milestones and issues of a GitHub
/// repository.
#[derive(Parser)]
#[command(name = "roadmap", version)]
struct Args {
    /// Repository to generate the roadmap from, as <owner>/<repo>
    repo: RepoName,
    /// Username for basic authentication
    #[arg(short, long)]
    username: Option<String>,
    /// Password for basic authentication
    #[arg(short, long)]
    password: Option<String>,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = Options {
        repo: args.repo,
        username: args.username,
        password: args.password,
    };
    match generate(&options).await {
        Ok(doc) => println!("{}", doc),
        Err(e) => {
            eprintln!("Failed: {}", e);
            std::process::exit(1);
        }
    }
}
