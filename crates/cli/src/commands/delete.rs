use std::env;

use console::style;
use modkit_codegen::{DeleteReport, ModuleCleaner};
use modkit_core::{ModuleDescriptor, ProjectPaths, ScaffoldError};

use crate::interactive;

pub async fn module(name: Option<&str>, force: bool) -> Result<(), ScaffoldError> {
    let project_root = env::current_dir()?;
    let paths = ProjectPaths::load(&project_root)?;

    let raw_name = match name {
        Some(given) => given.to_string(),
        None => interactive::ask_module_name()?,
    };
    let descriptor = ModuleDescriptor::new(&raw_name);

    let cleaner = ModuleCleaner::new(project_root, paths.clone());
    if !cleaner.module_exists(&descriptor) {
        println!(
            "❌ Module '{}' does not exist in {}.",
            descriptor.studly,
            paths.modules_dir.display()
        );
        return Ok(());
    }

    if !force && !interactive::confirm_delete(&descriptor.studly)? {
        println!("Deletion cancelled.");
        return Ok(());
    }

    match cleaner.delete(&descriptor) {
        Ok(report) => {
            print_report(&descriptor, &report, &paths);
            Ok(())
        }
        // The directory vanished between the existence check and the delete.
        Err(err) if err.is_soft_stop() => {
            println!("❌ {}", err);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

fn print_report(descriptor: &ModuleDescriptor, report: &DeleteReport, paths: &ProjectPaths) {
    if report.registry_missing {
        println!(
            "⚠️  {} not found — skipping provider removal.",
            paths.registry_file.display()
        );
    } else if report.unregistered {
        println!(
            "🧹 Removed {}ServiceProvider from {}",
            descriptor.studly,
            paths.registry_file.display()
        );
    }

    for migration in &report.migrations_removed {
        println!(
            "🗑️  Deleted migration: {}",
            migration.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    if let Some(seeder) = &report.seeder_removed {
        println!(
            "🗑️  Deleted seeder: {}",
            seeder.file_name().unwrap_or_default().to_string_lossy()
        );
    }
    println!("🗑️  Deleted: {} folder.", report.module_dir.display());

    println!(
        "\n✅ Module '{}' cleanup complete.",
        style(&descriptor.studly).green()
    );
}
