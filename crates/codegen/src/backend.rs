//! Host-project capabilities the generator delegates to.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use modkit_core::{ModuleDescriptor, ProjectPaths, ScaffoldError};

use crate::render::render_stub;
use crate::stubs;

/// Capability interface for artifacts created outside the module directory.
///
/// `create_migration` returns the created file's path so the generator can
/// patch it directly — there is no latest-file lookup anywhere. An embedding
/// project can substitute its own implementation, for instance to route
/// migration creation through its migration runner.
pub trait ScaffoldBackend {
    /// Create the module's migration and return its path.
    fn create_migration(&self, descriptor: &ModuleDescriptor) -> Result<PathBuf, ScaffoldError>;

    /// Create the module's seeder and return its path.
    fn create_seeder(&self, descriptor: &ModuleDescriptor) -> Result<PathBuf, ScaffoldError>;
}

/// Default backend: writes migration and seeder files straight into the
/// project tree.
pub struct FsBackend {
    project_root: PathBuf,
    paths: ProjectPaths,
}

impl FsBackend {
    pub fn new(project_root: impl Into<PathBuf>, paths: ProjectPaths) -> Self {
        Self {
            project_root: project_root.into(),
            paths,
        }
    }

    fn seeder_mod_path(&self) -> PathBuf {
        self.project_root.join(&self.paths.seeders_dir).join("mod.rs")
    }
}

impl ScaffoldBackend for FsBackend {
    fn create_migration(&self, descriptor: &ModuleDescriptor) -> Result<PathBuf, ScaffoldError> {
        let dir = self.project_root.join(&self.paths.migrations_dir);
        fs::create_dir_all(&dir)?;

        let timestamp = Utc::now().format("%Y%m%d_%H%M%S");
        let path = dir.join(format!("{}__{}.rs", timestamp, descriptor.migration_name()));
        let content = render_stub(stubs::MIGRATION_STUB, &[("table", &descriptor.table)]);
        fs::write(&path, content)?;

        Ok(path)
    }

    fn create_seeder(&self, descriptor: &ModuleDescriptor) -> Result<PathBuf, ScaffoldError> {
        let dir = self.project_root.join(&self.paths.seeders_dir);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
            fs::write(self.seeder_mod_path(), "// Database seeder declarations\n")?;
        }

        let path = dir.join(format!("{}_seeder.rs", descriptor.snake));
        let content = render_stub(
            stubs::SEEDER_STUB,
            &[
                ("name", descriptor.studly.as_str()),
                ("table", descriptor.table.as_str()),
            ],
        );
        fs::write(&path, content)?;

        declare_in_mod(&self.seeder_mod_path(), &format!("{}_seeder", descriptor.snake))?;

        Ok(path)
    }
}

/// Append a `pub mod <name>;` declaration if it is not present yet. Creates
/// the mod file when missing.
pub(crate) fn declare_in_mod(mod_path: &Path, module: &str) -> Result<(), ScaffoldError> {
    let mut content = if mod_path.exists() {
        fs::read_to_string(mod_path)?
    } else {
        String::new()
    };

    let declaration = format!("pub mod {};\n", module);
    if !content.contains(&declaration) {
        content.push_str(&declaration);
        fs::write(mod_path, content)?;
    }

    Ok(())
}

/// Drop a `pub mod <name>;` declaration if present.
pub(crate) fn undeclare_in_mod(mod_path: &Path, module: &str) -> Result<(), ScaffoldError> {
    if !mod_path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(mod_path)?;
    let declaration = format!("pub mod {};\n", module);
    if content.contains(&declaration) {
        fs::write(mod_path, content.replacen(&declaration, "", 1))?;
    }

    Ok(())
}
