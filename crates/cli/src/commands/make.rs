use std::env;

use console::style;
use modkit_codegen::{FsBackend, MakeOptions, ModuleGenerator, ModuleSummary};
use modkit_core::{ModuleDescriptor, ProjectPaths, ScaffoldError};

use crate::interactive;

pub async fn module(
    name: &str,
    columns: Option<&str>,
    no_migration: bool,
    seed: bool,
    no_input: bool,
) -> Result<(), ScaffoldError> {
    if columns.is_some() && no_migration {
        return Err(ScaffoldError::validation(
            "--columns requires a migration; drop --no-migration",
        ));
    }

    let project_root = env::current_dir()?;
    let paths = ProjectPaths::load(&project_root)?;
    let descriptor = ModuleDescriptor::new(name);

    // Check the pre-condition before asking any questions.
    if project_root
        .join(&paths.modules_dir)
        .join(&descriptor.snake)
        .exists()
    {
        println!(
            "❌ Module '{}' already exists in {}.",
            descriptor.studly,
            paths.modules_dir.display()
        );
        return Ok(());
    }

    println!(
        "🚀 Creating module structure for {}...",
        style(&descriptor.studly).cyan()
    );

    let options = interactive::resolve_make_options(columns, no_migration, seed, no_input)?;

    let generator = ModuleGenerator::new(
        project_root.clone(),
        paths.clone(),
        FsBackend::new(project_root, paths.clone()),
    );

    match generator.generate(name, &options) {
        Ok(summary) => {
            print_summary(&summary, &options, &paths);
            Ok(())
        }
        Err(ScaffoldError::ModuleExists { name }) => {
            println!(
                "❌ Module '{}' already exists in {}.",
                name,
                paths.modules_dir.display()
            );
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn print_summary(summary: &ModuleSummary, options: &MakeOptions, paths: &ProjectPaths) {
    if !summary.newly_registered {
        println!(
            "ℹ️  {}ServiceProvider already registered.",
            summary.descriptor.studly
        );
    }

    println!(
        "\n📦 Module '{}' created successfully with:",
        style(&summary.descriptor.studly).green()
    );
    println!("- Folder: {}", summary.module_dir.display());
    if let Some(migration) = &summary.migration {
        println!("- Migration: {}", migration.display());
        if !options.columns.is_empty() {
            let names: Vec<&str> = options.columns.iter().map(|c| c.name.as_str()).collect();
            println!("- Migration columns: {}", names.join(", "));
        }
    }
    if let Some(seeder) = &summary.seeder {
        println!("- Seeder: {}", seeder.display());
    }
    if summary.newly_registered {
        println!(
            "- ServiceProvider: registered in {}",
            paths.registry_file.display()
        );
    }
    println!("- CRUD files: Controller, Model, Repository, Service, Request, routes/api.rs");
}
