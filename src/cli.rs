use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Annotate entity source files with their database schema", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Insert or refresh the schema comment block in entity source files
    Annotate(AnnotateArgs),
    /// Print the schema comment block for one entity without touching files
    Preview(PreviewArgs),
    /// Strip the schema comment block from entity source files
    Remove(RemoveArgs),
}

#[derive(Debug, Args)]
pub struct AnnotateArgs {
    /// Schema catalog file (.json) describing entity columns
    #[arg(short = 'c', long = "catalog")]
    pub catalog: PathBuf,
    /// Directory containing entity source files
    #[arg(short = 'd', long = "models-dir")]
    pub models_dir: PathBuf,
    /// Entity names to annotate (all discovered entities if omitted)
    pub names: Vec<String>,
    /// File extension of entity source files
    #[arg(long, default_value = "rb")]
    pub extension: String,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Schema catalog file (.json) describing entity columns
    #[arg(short = 'c', long = "catalog")]
    pub catalog: PathBuf,
    /// Entity name to render
    pub name: String,
    /// File extension used to normalize file-name tokens
    #[arg(long, default_value = "rb")]
    pub extension: String,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Directory containing entity source files
    #[arg(short = 'd', long = "models-dir")]
    pub models_dir: PathBuf,
    /// Entity names to clean (all discovered entities if omitted)
    pub names: Vec<String>,
    /// File extension of entity source files
    #[arg(long, default_value = "rb")]
    pub extension: String,
}
