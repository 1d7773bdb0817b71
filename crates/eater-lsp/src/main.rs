use std::path::PathBuf;

use clap::Parser;
use tower_lsp::{LspService, Server};

use eater_lsp_core::LibraryIndex;

mod capabilities;
mod document;
mod handlers;
mod server;

#[derive(Parser)]
#[command(name = "eater-lsp")]
#[command(about = "Language Server for 4K Eater shaders")]
struct Cli {
    /// Use stdio for communication (required)
    #[arg(long)]
    stdio: bool,

    /// Enable debug mode
    #[arg(long)]
    debug: bool,

    /// Path to the generated library index
    #[arg(long, value_name = "PATH", default_value = "libs-index.json")]
    libs_index: PathBuf,
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    if !args.stdio {
        eprintln!("Error: --stdio flag is required");
        std::process::exit(1);
    }

    // A missing or unreadable index degrades to an empty one; completion for
    // the static and scanned sets still works without it.
    let index = match LibraryIndex::load(&args.libs_index) {
        Ok(index) => index,
        Err(err) => {
            eprintln!(
                "Warning: could not load library index from {}: {}",
                args.libs_index.display(),
                err
            );
            LibraryIndex::default()
        }
    };

    let stdin = tokio::io::stdin();
    let stdout = tokio::io::stdout();

    let (service, socket) =
        LspService::new(|client| server::Backend::new(client, index, args.debug));

    Server::new(stdin, stdout, socket).serve(service).await;
}
