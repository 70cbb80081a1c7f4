mod commands;
mod interactive;

use clap::{Parser, Subcommand};
use modkit_core::ScaffoldError;

#[derive(Parser)]
#[command(name = "modkit")]
#[command(about = "Module scaffolding for elif-style Rust web projects", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scaffold project pieces
    Make {
        #[command(subcommand)]
        make_command: MakeCommands,
    },

    /// Remove previously scaffolded pieces
    Delete {
        #[command(subcommand)]
        delete_command: DeleteCommands,
    },
}

#[derive(Subcommand)]
enum MakeCommands {
    /// Generate a module: controller, model, repository, service, request,
    /// routes, provider, migration and optional seeder
    Module {
        /// Module name (e.g. Post, BlogPost)
        name: String,

        /// Columns in name:type[:modifier...] format
        /// (e.g. "title:string, status:enum:draft|published:nullable")
        #[arg(long)]
        columns: Option<String>,

        /// Skip migration creation
        #[arg(long)]
        no_migration: bool,

        /// Create a seeder for the module
        #[arg(long)]
        seed: bool,

        /// Answer every unanswered prompt with its default
        #[arg(long)]
        no_input: bool,
    },
}

#[derive(Subcommand)]
enum DeleteCommands {
    /// Delete a module and every file generated for it
    Module {
        /// Module name (prompted for when omitted)
        name: Option<String>,

        /// Skip the confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), ScaffoldError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Make { make_command } => match make_command {
            MakeCommands::Module {
                name,
                columns,
                no_migration,
                seed,
                no_input,
            } => {
                commands::make::module(&name, columns.as_deref(), no_migration, seed, no_input)
                    .await?;
            }
        },
        Commands::Delete { delete_command } => match delete_command {
            DeleteCommands::Module { name, force } => {
                commands::delete::module(name.as_deref(), force).await?;
            }
        },
    }

    Ok(())
}
