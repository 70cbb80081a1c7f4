//! Stub templates for the generated module surface.
//!
//! Placeholders: `{{ name }}` (StudlyCase), `{{ snake }}`, `{{ table }}` and,
//! in the model stub, `{{ fillable }}` (comma-joined quoted column names).
//! The generated text targets an elif-style host project; the stubs are
//! plain text to this crate and are never compiled here.

pub const ROUTES_STUB: &str = r#"use elif_http::routing::ElifRouter;

use crate::modules::{{ snake }}::controllers::{{ snake }}_controller::{{ name }}Controller;

/// API routes for the {{ name }} module.
pub fn routes(router: ElifRouter) -> ElifRouter {
    router.controller({{ name }}Controller::default())
}
"#;

pub const CONTROLLER_STUB: &str = r#"use elif_http::{controller, get, post, put, delete, ElifRequest, ElifResponse, HttpResult};

use crate::modules::{{ snake }}::requests::{{ snake }}_request::{{ name }}Request;
use crate::modules::{{ snake }}::services::{{ snake }}_service::{{ name }}Service;

#[controller("/api/{{ table }}")]
#[derive(Default)]
pub struct {{ name }}Controller {
    service: {{ name }}Service,
}

impl {{ name }}Controller {
    #[get("")]
    pub async fn index(&self, _req: ElifRequest) -> HttpResult<ElifResponse> {
        let items = self.service.list().await?;
        Ok(ElifResponse::json(&items)?)
    }

    #[get("/{id}")]
    pub async fn show(&self, req: ElifRequest) -> HttpResult<ElifResponse> {
        let id = req.path_param("id")?;
        let item = self.service.find(&id).await?;
        Ok(ElifResponse::json(&item)?)
    }

    #[post("")]
    pub async fn create(&self, req: ElifRequest) -> HttpResult<ElifResponse> {
        let payload: {{ name }}Request = req.validate_json()?;
        let item = self.service.create(payload).await?;
        Ok(ElifResponse::created().json(&item)?)
    }

    #[put("/{id}")]
    pub async fn update(&self, req: ElifRequest) -> HttpResult<ElifResponse> {
        let id = req.path_param("id")?;
        let payload: {{ name }}Request = req.validate_json()?;
        let item = self.service.update(&id, payload).await?;
        Ok(ElifResponse::json(&item)?)
    }

    #[delete("/{id}")]
    pub async fn destroy(&self, req: ElifRequest) -> HttpResult<ElifResponse> {
        let id = req.path_param("id")?;
        self.service.delete(&id).await?;
        Ok(ElifResponse::no_content())
    }
}
"#;

pub const SERVICE_STUB: &str = r#"use elif_orm::error::ModelError;

use crate::modules::{{ snake }}::models::{{ snake }}::{{ name }};
use crate::modules::{{ snake }}::repositories::{{ snake }}_repository::{{ name }}Repository;
use crate::modules::{{ snake }}::requests::{{ snake }}_request::{{ name }}Request;

/// Business logic for the {{ name }} module.
#[derive(Default)]
pub struct {{ name }}Service {
    repository: {{ name }}Repository,
}

impl {{ name }}Service {
    pub fn new(repository: {{ name }}Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<{{ name }}>, ModelError> {
        self.repository.all().await
    }

    pub async fn find(&self, id: &str) -> Result<Option<{{ name }}>, ModelError> {
        self.repository.find(id).await
    }

    pub async fn create(&self, payload: {{ name }}Request) -> Result<{{ name }}, ModelError> {
        self.repository.create(payload).await
    }

    pub async fn update(&self, id: &str, payload: {{ name }}Request) -> Result<{{ name }}, ModelError> {
        self.repository.update(id, payload).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ModelError> {
        self.repository.delete(id).await
    }
}
"#;

pub const REPOSITORY_STUB: &str = r#"use elif_orm::error::ModelError;
use elif_orm::prelude::*;

use crate::modules::{{ snake }}::models::{{ snake }}::{{ name }};
use crate::modules::{{ snake }}::requests::{{ snake }}_request::{{ name }}Request;

/// Data access for {{ name }} records.
#[derive(Default)]
pub struct {{ name }}Repository;

impl {{ name }}Repository {
    pub async fn all(&self) -> Result<Vec<{{ name }}>, ModelError> {
        {{ name }}::query().load().await
    }

    pub async fn find(&self, id: &str) -> Result<Option<{{ name }}>, ModelError> {
        {{ name }}::query().where_eq("id", id).first().await
    }

    pub async fn create(&self, payload: {{ name }}Request) -> Result<{{ name }}, ModelError> {
        {{ name }}::from_request(payload).save().await
    }

    pub async fn update(&self, id: &str, payload: {{ name }}Request) -> Result<{{ name }}, ModelError> {
        let mut item = {{ name }}::find_or_fail(id).await?;
        item.fill(payload);
        item.save().await
    }

    pub async fn delete(&self, id: &str) -> Result<(), ModelError> {
        {{ name }}::find_or_fail(id).await?.delete().await
    }
}
"#;

pub const REQUEST_STUB: &str = r#"use elif_validation::prelude::*;
use serde::{Deserialize, Serialize};

/// Validated payload for creating or updating a {{ name }}.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct {{ name }}Request {
    // Add validation rules for {{ name }} payloads here.
}
"#;

pub const MODEL_STUB: &str = r#"use chrono::{DateTime, Utc};
use elif_orm::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Model, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[table_name = "{{ table }}"]
pub struct {{ name }} {
    #[primary_key]
    pub id: Uuid,

    #[timestamp]
    pub created_at: DateTime<Utc>,

    #[timestamp]
    pub updated_at: DateTime<Utc>,
}

impl {{ name }} {
    /// Columns that may be mass-assigned from request payloads.
    pub const FILLABLE: &'static [&'static str] = &[{{ fillable }}];
}
"#;

pub const PROVIDER_STUB: &str = r#"use elif_core::container::ContainerBuilder;
use elif_core::providers::{ProviderError, ServiceProvider};

use crate::modules::{{ snake }}::services::{{ snake }}_service::{{ name }}Service;

/// Registers the {{ name }} module's services with the application container.
pub struct {{ name }}ServiceProvider;

impl ServiceProvider for {{ name }}ServiceProvider {
    fn name(&self) -> &'static str {
        "{{ name }}ServiceProvider"
    }

    fn register(&self, builder: ContainerBuilder) -> Result<ContainerBuilder, ProviderError> {
        Ok(builder.singleton({{ name }}Service::default()))
    }
}
"#;

pub const MIGRATION_STUB: &str = r#"use elif_orm::migrations::SchemaBuilder;

pub fn up(schema: &mut SchemaBuilder) {
    schema.create_table("{{ table }}", |table| {
        table.uuid("id");
        table.timestamps();
    });
}

pub fn down(schema: &mut SchemaBuilder) {
    schema.drop_table("{{ table }}");
}
"#;

pub const SEEDER_STUB: &str = r#"use elif_orm::Database;

pub struct {{ name }}Seeder;

impl {{ name }}Seeder {
    /// Seed the {{ table }} table.
    pub async fn run(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
        // Add seeding logic for {{ table }} here.
        let _ = db;
        Ok(())
    }

    /// Seeders that must run before this one.
    pub fn dependencies() -> Vec<&'static str> {
        vec![]
    }
}
"#;
