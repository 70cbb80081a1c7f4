//! The delete-side cleanup pipeline.
//!
//! The registry entry is removed before anything is deleted from disk, so a
//! failure partway leaves the registry consistent with "module gone" rather
//! than referencing files that no longer exist.

use std::fs;
use std::path::PathBuf;

use modkit_core::{ModuleDescriptor, ProjectPaths, ScaffoldError};

use crate::backend::undeclare_in_mod;
use crate::registry::ProviderRegistry;

/// What one delete run removed, for the CLI to report.
#[derive(Debug)]
pub struct DeleteReport {
    pub module_dir: PathBuf,
    /// `false` when the provider was not in the registry
    pub unregistered: bool,
    /// The registry file was absent; removal was skipped with a warning
    pub registry_missing: bool,
    pub migrations_removed: Vec<PathBuf>,
    pub seeder_removed: Option<PathBuf>,
}

pub struct ModuleCleaner {
    project_root: PathBuf,
    paths: ProjectPaths,
}

impl ModuleCleaner {
    pub fn new(project_root: impl Into<PathBuf>, paths: ProjectPaths) -> Self {
        Self {
            project_root: project_root.into(),
            paths,
        }
    }

    pub fn module_exists(&self, descriptor: &ModuleDescriptor) -> bool {
        self.module_dir(descriptor).exists()
    }

    /// Remove everything that was generated for the module. The caller is
    /// responsible for confirmation; this performs no prompting.
    pub fn delete(&self, descriptor: &ModuleDescriptor) -> Result<DeleteReport, ScaffoldError> {
        let module_dir = self.module_dir(descriptor);
        if !module_dir.exists() {
            return Err(ScaffoldError::ModuleNotFound {
                name: descriptor.studly.clone(),
            });
        }

        let (unregistered, registry_missing) =
            self.unregister_provider(&descriptor.provider_path())?;
        let migrations_removed = self.delete_migrations(descriptor)?;
        let seeder_removed = self.delete_seeder(descriptor)?;

        undeclare_in_mod(
            &self.project_root.join(&self.paths.modules_dir).join("mod.rs"),
            &descriptor.snake,
        )?;
        fs::remove_dir_all(&module_dir)?;

        Ok(DeleteReport {
            module_dir,
            unregistered,
            registry_missing,
            migrations_removed,
            seeder_removed,
        })
    }

    fn module_dir(&self, descriptor: &ModuleDescriptor) -> PathBuf {
        self.project_root
            .join(&self.paths.modules_dir)
            .join(&descriptor.snake)
    }

    fn unregister_provider(&self, provider: &str) -> Result<(bool, bool), ScaffoldError> {
        let path = self.project_root.join(&self.paths.registry_file);
        if !path.exists() {
            return Ok((false, true));
        }

        let content = fs::read_to_string(&path)?;
        let mut registry = ProviderRegistry::parse(&content)?;
        let removed = registry.remove(provider);
        if removed {
            fs::write(&path, registry.to_file_string())?;
        }

        Ok((removed, false))
    }

    /// Delete every migration whose filename contains
    /// `create_<table>_table`, in name order.
    fn delete_migrations(
        &self,
        descriptor: &ModuleDescriptor,
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let dir = self.project_root.join(&self.paths.migrations_dir);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let fragment = descriptor.migration_name();
        let mut entries: Vec<_> = fs::read_dir(&dir)?
            .filter_map(|entry| entry.ok())
            .collect();
        entries.sort_by_key(|entry| entry.file_name());

        let mut removed = Vec::new();
        for entry in entries {
            if entry.file_name().to_string_lossy().contains(&fragment) {
                let path = entry.path();
                fs::remove_file(&path)?;
                removed.push(path);
            }
        }

        Ok(removed)
    }

    fn delete_seeder(
        &self,
        descriptor: &ModuleDescriptor,
    ) -> Result<Option<PathBuf>, ScaffoldError> {
        let dir = self.project_root.join(&self.paths.seeders_dir);
        let path = dir.join(format!("{}_seeder.rs", descriptor.snake));
        if !path.exists() {
            return Ok(None);
        }

        fs::remove_file(&path)?;
        undeclare_in_mod(&dir.join("mod.rs"), &format!("{}_seeder", descriptor.snake))?;

        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cleaner_in(dir: &TempDir) -> ModuleCleaner {
        ModuleCleaner::new(dir.path(), ProjectPaths::default())
    }

    #[test]
    fn deleting_missing_module_mutates_nothing() {
        let dir = TempDir::new().unwrap();
        let cleaner = cleaner_in(&dir);
        let descriptor = ModuleDescriptor::new("ghost");

        let err = cleaner.delete(&descriptor).unwrap_err();

        assert!(matches!(err, ScaffoldError::ModuleNotFound { name } if name == "Ghost"));
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
    }

    #[test]
    fn missing_registry_is_a_warning_not_an_error() {
        let dir = TempDir::new().unwrap();
        let cleaner = cleaner_in(&dir);
        let descriptor = ModuleDescriptor::new("post");

        fs::create_dir_all(dir.path().join("src/modules/post")).unwrap();
        let report = cleaner.delete(&descriptor).unwrap();

        assert!(report.registry_missing);
        assert!(!report.unregistered);
        assert!(!dir.path().join("src/modules/post").exists());
    }
}
