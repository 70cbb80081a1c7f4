//! End-to-end generate → delete round-trip over a temporary project tree.

use std::fs;

use modkit_codegen::{FsBackend, MakeOptions, ModuleCleaner, ModuleGenerator};
use modkit_core::{parse_columns, ModuleDescriptor, ProjectPaths};
use tempfile::TempDir;

fn scaffold_pair(dir: &TempDir) -> (ModuleGenerator<FsBackend>, ModuleCleaner) {
    let paths = ProjectPaths::default();
    let generator = ModuleGenerator::new(
        dir.path(),
        paths.clone(),
        FsBackend::new(dir.path(), paths.clone()),
    );
    let cleaner = ModuleCleaner::new(dir.path(), paths);
    (generator, cleaner)
}

#[test]
fn generate_then_delete_restores_the_registry() {
    let dir = TempDir::new().unwrap();
    let (generator, cleaner) = scaffold_pair(&dir);

    let options = MakeOptions {
        migration: true,
        columns: parse_columns("title:string, status:enum:draft|published:nullable"),
        seeder: true,
    };
    let summary = generator.generate("blog_post", &options).unwrap();

    let registry_path = dir.path().join("src/bootstrap/providers.rs");
    let registry_after_create = fs::read_to_string(&registry_path).unwrap();
    assert!(registry_after_create
        .contains("crate::modules::blog_post::provider::BlogPostServiceProvider"));

    let migration = summary.migration.clone().unwrap();
    assert!(migration.exists());
    let migration_content = fs::read_to_string(&migration).unwrap();
    assert!(migration_content.contains(
        "table.enum_(\"status\", &[\"draft\", \"published\"]).nullable();"
    ));

    let seeder = summary.seeder.clone().unwrap();
    assert!(seeder.exists());

    let report = cleaner
        .delete(&ModuleDescriptor::new("blog_post"))
        .unwrap();

    assert!(report.unregistered);
    assert_eq!(report.migrations_removed, vec![migration.clone()]);
    assert_eq!(report.seeder_removed, Some(seeder.clone()));

    assert!(!summary.module_dir.exists());
    assert!(!migration.exists());
    assert!(!seeder.exists());

    // Add followed by Remove leaves the registry as if the module never was.
    let registry_after_delete = fs::read_to_string(&registry_path).unwrap();
    assert!(!registry_after_delete.contains("BlogPostServiceProvider"));

    let modules_mod = fs::read_to_string(dir.path().join("src/modules/mod.rs")).unwrap();
    assert!(!modules_mod.contains("pub mod blog_post;"));
}

#[test]
fn regenerating_after_delete_succeeds() {
    let dir = TempDir::new().unwrap();
    let (generator, cleaner) = scaffold_pair(&dir);

    generator.generate("post", &MakeOptions::default()).unwrap();
    cleaner.delete(&ModuleDescriptor::new("post")).unwrap();
    let summary = generator.generate("post", &MakeOptions::default()).unwrap();

    assert!(summary.newly_registered);
    assert!(summary.module_dir.exists());
}

#[test]
fn paths_from_config_are_honored() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("modkit.toml"),
        "[paths]\nmodules_dir = \"app/modules\"\nregistry_file = \"app/providers.rs\"\n",
    )
    .unwrap();

    let paths = ProjectPaths::load(dir.path()).unwrap();
    let generator = ModuleGenerator::new(
        dir.path(),
        paths.clone(),
        FsBackend::new(dir.path(), paths.clone()),
    );

    generator.generate("post", &MakeOptions::default()).unwrap();

    assert!(dir.path().join("app/modules/post/provider.rs").exists());
    assert!(dir.path().join("app/providers.rs").exists());
    // untouched defaults still apply to the rest
    assert_eq!(paths.migrations_dir, ProjectPaths::default().migrations_dir);
}
