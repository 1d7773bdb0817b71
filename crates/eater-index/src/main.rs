use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use eater_lsp_core::LibraryIndex;

/// 4K Eater library index generator
#[derive(Parser)]
#[command(name = "eater-index")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scans the shader library directory and writes the completion index")]
struct Cli {
    /// Directory containing the .glsl library files
    #[arg(value_name = "LIBS_DIR", default_value = "libs")]
    libs_dir: PathBuf,

    /// Where to write the generated index
    #[arg(short, long, value_name = "PATH", default_value = "libs-index.json")]
    output: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let index = LibraryIndex::build(&cli.libs_dir)
        .with_context(|| format!("failed to index {}", cli.libs_dir.display()))?;
    index
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    println!(
        "Generated index for {} files and {} functions to {}",
        index.libs_files.len(),
        index.libs_functions.len(),
        cli.output.display()
    );
    Ok(())
}
