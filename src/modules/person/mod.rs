pub mod mapper;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use erudio_http::hateoas::LinkBuilder;
use erudio_kernel::{InitCtx, Migration, Module};
use sqlx::SqlitePool;

use repository::SqlitePersonRepository;
use service::PersonService;

pub(crate) const MIGRATION_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS person (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name  TEXT NOT NULL,
        address    TEXT NOT NULL,
        gender     TEXT NOT NULL,
        enabled    INTEGER NOT NULL DEFAULT 1
    );
    CREATE INDEX IF NOT EXISTS idx_person_first_name ON person (first_name);
"#;

/// People endpoints mounted under `/person`
pub struct PersonModule {
    service: PersonService,
}

impl PersonModule {
    pub fn new(pool: SqlitePool, links: LinkBuilder) -> Self {
        Self {
            service: PersonService::new(Arc::new(SqlitePersonRepository::new(pool)), links),
        }
    }
}

#[async_trait]
impl Module for PersonModule {
    fn name(&self) -> &'static str {
        "person"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "person module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let person = serde_json::json!({ "$ref": "#/components/schemas/Person" });
        let paged = serde_json::json!({ "$ref": "#/components/schemas/PagedPerson" });
        let error = serde_json::json!({ "$ref": "#/components/schemas/ErrorResponse" });
        let page_params = serde_json::json!([
            { "name": "page", "in": "query", "schema": { "type": "integer", "default": 0 } },
            { "name": "size", "in": "query", "schema": { "type": "integer", "default": 12 } },
            { "name": "direction", "in": "query", "schema": { "type": "string", "enum": ["asc", "desc"] } }
        ]);
        let id_param = serde_json::json!([
            { "name": "id", "in": "path", "required": true, "schema": { "type": "integer" } }
        ]);

        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Find all people",
                        "tags": ["People"],
                        "parameters": page_params,
                        "responses": {
                            "200": { "description": "Page of people", "content": { "application/json": { "schema": paged } } }
                        }
                    },
                    "post": {
                        "summary": "Add a new person",
                        "tags": ["People"],
                        "requestBody": { "content": { "application/json": { "schema": person } } },
                        "responses": {
                            "200": { "description": "Created person", "content": { "application/json": { "schema": person } } },
                            "400": { "description": "Missing or malformed body", "content": { "application/json": { "schema": error } } }
                        }
                    },
                    "put": {
                        "summary": "Update a person",
                        "tags": ["People"],
                        "requestBody": { "content": { "application/json": { "schema": person } } },
                        "responses": {
                            "200": { "description": "Updated person", "content": { "application/json": { "schema": person } } },
                            "404": { "description": "Unknown id", "content": { "application/json": { "schema": error } } }
                        }
                    }
                },
                "/v2": {
                    "post": {
                        "summary": "Add a new person with birth day",
                        "tags": ["People"],
                        "responses": { "200": { "description": "Created person" } }
                    }
                },
                "/findPersonByName/{first_name}": {
                    "get": {
                        "summary": "Find people by first name",
                        "tags": ["People"],
                        "parameters": [
                            { "name": "first_name", "in": "path", "required": true, "schema": { "type": "string" } }
                        ],
                        "responses": {
                            "200": { "description": "Page of people", "content": { "application/json": { "schema": paged } } }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Find a person",
                        "tags": ["People"],
                        "parameters": id_param,
                        "responses": {
                            "200": { "description": "Person", "content": { "application/json": { "schema": person } } },
                            "404": { "description": "Unknown id", "content": { "application/json": { "schema": error } } }
                        }
                    },
                    "patch": {
                        "summary": "Disable a person",
                        "tags": ["People"],
                        "parameters": id_param,
                        "responses": {
                            "200": { "description": "Disabled person", "content": { "application/json": { "schema": person } } },
                            "404": { "description": "Unknown id", "content": { "application/json": { "schema": error } } }
                        }
                    },
                    "delete": {
                        "summary": "Delete a person",
                        "tags": ["People"],
                        "parameters": id_param,
                        "responses": {
                            "204": { "description": "Deleted" },
                            "404": { "description": "Unknown id", "content": { "application/json": { "schema": error } } }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "Link": {
                        "type": "object",
                        "properties": { "rel": { "type": "string" }, "href": { "type": "string" } }
                    },
                    "Person": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "address": { "type": "string" },
                            "first_name": { "type": "string" },
                            "last_name": { "type": "string" },
                            "gender": { "type": "string" },
                            "enabled": { "type": "boolean" },
                            "links": { "type": "array", "items": { "$ref": "#/components/schemas/Link" } }
                        }
                    },
                    "PagedPerson": {
                        "type": "object",
                        "properties": {
                            "content": { "type": "array", "items": person },
                            "links": { "type": "array", "items": { "$ref": "#/components/schemas/Link" } },
                            "page": { "type": "object" }
                        }
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_person",
            up: MIGRATION_SQL,
        }]
    }
}

pub fn create_module(pool: SqlitePool, links: LinkBuilder) -> Arc<dyn Module> {
    Arc::new(PersonModule::new(pool, links))
}
