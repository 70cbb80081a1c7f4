//! The create-side scaffolding pipeline.
//!
//! Prompt answers arrive pre-resolved in [`MakeOptions`], so generation is a
//! function of (project root, name, options) with no terminal interaction.
//! The pipeline is linear and does not roll back: the first hard failure
//! aborts with the filesystem left partially scaffolded.

use std::fs;
use std::path::PathBuf;

use modkit_core::{ColumnSpec, ModuleDescriptor, ProjectPaths, ScaffoldError};

use crate::backend::{declare_in_mod, ScaffoldBackend};
use crate::migration::patch_migration;
use crate::registry::{ProviderRegistry, EMPTY_REGISTRY};
use crate::render::render_stub;
use crate::stubs;

/// Answers to every `make module` prompt, resolved before generation begins.
#[derive(Debug, Clone, Default)]
pub struct MakeOptions {
    /// Create and patch a migration
    pub migration: bool,
    /// Parsed column specification for the migration and model
    pub columns: Vec<ColumnSpec>,
    /// Create a seeder
    pub seeder: bool,
}

/// What one generation run produced, for the CLI to report.
#[derive(Debug)]
pub struct ModuleSummary {
    pub descriptor: ModuleDescriptor,
    pub module_dir: PathBuf,
    pub files: Vec<PathBuf>,
    pub migration: Option<PathBuf>,
    pub seeder: Option<PathBuf>,
    pub provider_entry: String,
    /// `false` when the provider was already registered (informational no-op)
    pub newly_registered: bool,
}

/// Subdirectories created under every module.
const MODULE_DIRS: &[&str] = &[
    "controllers",
    "models",
    "requests",
    "services",
    "repositories",
    "routes",
];

pub struct ModuleGenerator<B> {
    project_root: PathBuf,
    paths: ProjectPaths,
    backend: B,
}

impl<B: ScaffoldBackend> ModuleGenerator<B> {
    pub fn new(project_root: impl Into<PathBuf>, paths: ProjectPaths, backend: B) -> Self {
        Self {
            project_root: project_root.into(),
            paths,
            backend,
        }
    }

    pub fn generate(
        &self,
        name: &str,
        options: &MakeOptions,
    ) -> Result<ModuleSummary, ScaffoldError> {
        let descriptor = ModuleDescriptor::new(name);
        let module_dir = self.module_dir(&descriptor);

        if module_dir.exists() {
            return Err(ScaffoldError::ModuleExists {
                name: descriptor.studly,
            });
        }

        for dir in MODULE_DIRS {
            fs::create_dir_all(module_dir.join(dir))?;
        }

        let migration = if options.migration {
            let path = self.backend.create_migration(&descriptor)?;
            patch_migration(&path, &options.columns)?;
            Some(path)
        } else {
            None
        };

        let files = self.write_module_files(&descriptor, &module_dir, &options.columns)?;
        declare_in_mod(
            &self.project_root.join(&self.paths.modules_dir).join("mod.rs"),
            &descriptor.snake,
        )?;

        let seeder = if options.seeder {
            Some(self.backend.create_seeder(&descriptor)?)
        } else {
            None
        };

        let provider_entry = descriptor.provider_path();
        let newly_registered = self.register_provider(&provider_entry)?;

        Ok(ModuleSummary {
            descriptor,
            module_dir,
            files,
            migration,
            seeder,
            provider_entry,
            newly_registered,
        })
    }

    fn module_dir(&self, descriptor: &ModuleDescriptor) -> PathBuf {
        self.project_root
            .join(&self.paths.modules_dir)
            .join(&descriptor.snake)
    }

    fn write_module_files(
        &self,
        descriptor: &ModuleDescriptor,
        module_dir: &std::path::Path,
        columns: &[ColumnSpec],
    ) -> Result<Vec<PathBuf>, ScaffoldError> {
        let fillable = columns
            .iter()
            .map(|column| format!("\"{}\"", column.name))
            .collect::<Vec<_>>()
            .join(", ");
        let vars = [
            ("name", descriptor.studly.as_str()),
            ("snake", descriptor.snake.as_str()),
            ("table", descriptor.table.as_str()),
            ("fillable", fillable.as_str()),
        ];

        let snake = &descriptor.snake;
        let outputs = [
            (PathBuf::from("routes/api.rs"), stubs::ROUTES_STUB),
            (
                PathBuf::from("controllers").join(format!("{}_controller.rs", snake)),
                stubs::CONTROLLER_STUB,
            ),
            (
                PathBuf::from("services").join(format!("{}_service.rs", snake)),
                stubs::SERVICE_STUB,
            ),
            (
                PathBuf::from("repositories").join(format!("{}_repository.rs", snake)),
                stubs::REPOSITORY_STUB,
            ),
            (
                PathBuf::from("requests").join(format!("{}_request.rs", snake)),
                stubs::REQUEST_STUB,
            ),
            (
                PathBuf::from("models").join(format!("{}.rs", snake)),
                stubs::MODEL_STUB,
            ),
            (PathBuf::from("provider.rs"), stubs::PROVIDER_STUB),
        ];

        let mut written = Vec::new();
        for (relative, stub) in outputs {
            let path = module_dir.join(relative);
            fs::write(&path, render_stub(stub, &vars))?;
            written.push(path);
        }

        // Rust module wiring: the generated tree compiles as soon as the host
        // declares `pub mod <snake>;`, which generate() appends for it.
        for (dir, declaration) in [
            ("controllers", format!("{}_controller", snake)),
            ("models", snake.to_string()),
            ("requests", format!("{}_request", snake)),
            ("services", format!("{}_service", snake)),
            ("repositories", format!("{}_repository", snake)),
            ("routes", "api".to_string()),
        ] {
            let mod_path = module_dir.join(dir).join("mod.rs");
            fs::write(&mod_path, format!("pub mod {};\n", declaration))?;
            written.push(mod_path);
        }

        let module_mod = module_dir.join("mod.rs");
        fs::write(
            &module_mod,
            "pub mod controllers;\npub mod models;\npub mod requests;\npub mod services;\npub mod repositories;\npub mod routes;\npub mod provider;\n",
        )?;
        written.push(module_mod);

        Ok(written)
    }

    fn register_provider(&self, provider: &str) -> Result<bool, ScaffoldError> {
        let path = self.project_root.join(&self.paths.registry_file);
        if !path.exists() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, EMPTY_REGISTRY)?;
        }

        let content = fs::read_to_string(&path)?;
        let mut registry = ProviderRegistry::parse(&content)?;
        if !registry.add(provider) {
            return Ok(false);
        }
        fs::write(&path, registry.to_file_string())?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FsBackend;
    use tempfile::TempDir;

    fn generator_in(dir: &TempDir) -> ModuleGenerator<FsBackend> {
        let paths = ProjectPaths::default();
        ModuleGenerator::new(
            dir.path(),
            paths.clone(),
            FsBackend::new(dir.path(), paths),
        )
    }

    #[test]
    fn generates_the_full_file_surface() {
        let dir = TempDir::new().unwrap();
        let generator = generator_in(&dir);

        let options = MakeOptions {
            migration: false,
            columns: vec![],
            seeder: false,
        };
        let summary = generator.generate("blog_post", &options).unwrap();

        let module_dir = dir.path().join("src/modules/blog_post");
        assert_eq!(summary.module_dir, module_dir);
        for relative in [
            "controllers/blog_post_controller.rs",
            "models/blog_post.rs",
            "requests/blog_post_request.rs",
            "services/blog_post_service.rs",
            "repositories/blog_post_repository.rs",
            "routes/api.rs",
            "provider.rs",
            "mod.rs",
        ] {
            assert!(module_dir.join(relative).exists(), "missing {}", relative);
        }
        assert!(summary.migration.is_none());
        assert!(summary.seeder.is_none());

        let declared =
            fs::read_to_string(dir.path().join("src/modules/mod.rs")).unwrap();
        assert!(declared.contains("pub mod blog_post;"));
    }

    #[test]
    fn model_fillable_lists_the_columns() {
        let dir = TempDir::new().unwrap();
        let generator = generator_in(&dir);

        let options = MakeOptions {
            migration: true,
            columns: modkit_core::parse_columns("title:string, content:text"),
            seeder: false,
        };
        generator.generate("post", &options).unwrap();

        let model =
            fs::read_to_string(dir.path().join("src/modules/post/models/post.rs")).unwrap();
        assert!(model.contains("&[\"title\", \"content\"];"));
        assert!(model.contains("#[table_name = \"posts\"]"));
        assert!(model.contains("pub struct Post {"));
    }

    #[test]
    fn migration_is_created_and_patched() {
        let dir = TempDir::new().unwrap();
        let generator = generator_in(&dir);

        let options = MakeOptions {
            migration: true,
            columns: modkit_core::parse_columns("title:string:nullable"),
            seeder: false,
        };
        let summary = generator.generate("post", &options).unwrap();

        let migration = summary.migration.unwrap();
        let content = fs::read_to_string(&migration).unwrap();
        assert!(content.contains("table.string(\"title\").nullable();"));
        assert!(content.contains("table.timestamps();"));
    }

    #[test]
    fn provider_is_registered_once() {
        let dir = TempDir::new().unwrap();
        let generator = generator_in(&dir);

        let summary = generator
            .generate("post", &MakeOptions::default())
            .unwrap();
        assert!(summary.newly_registered);
        assert_eq!(
            summary.provider_entry,
            "crate::modules::post::provider::PostServiceProvider"
        );

        let registry =
            fs::read_to_string(dir.path().join("src/bootstrap/providers.rs")).unwrap();
        assert!(registry.contains("\"crate::modules::post::provider::PostServiceProvider\","));
    }

    #[test]
    fn existing_module_is_a_precondition_failure() {
        let dir = TempDir::new().unwrap();
        let generator = generator_in(&dir);

        generator.generate("post", &MakeOptions::default()).unwrap();
        let err = generator
            .generate("post", &MakeOptions::default())
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::ModuleExists { name } if name == "Post"));
    }

    #[test]
    fn unmatched_stub_placeholders_never_leak() {
        let dir = TempDir::new().unwrap();
        let generator = generator_in(&dir);

        let summary = generator
            .generate("post", &MakeOptions::default())
            .unwrap();

        for file in &summary.files {
            let content = fs::read_to_string(file).unwrap();
            assert!(
                !content.contains("{{ "),
                "unrendered placeholder in {}",
                file.display()
            );
        }
    }
}
