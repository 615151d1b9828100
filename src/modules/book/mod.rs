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

use repository::SqliteBookRepository;
use service::BookService;

pub(crate) const MIGRATION_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS book (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        author      TEXT NOT NULL,
        launch_date TEXT NOT NULL,
        price       REAL NOT NULL,
        title       TEXT NOT NULL
    );
    CREATE INDEX IF NOT EXISTS idx_book_title ON book (title);
"#;

/// Book catalogue mounted under `/book`
pub struct BookModule {
    service: BookService,
}

impl BookModule {
    pub fn new(pool: SqlitePool, links: LinkBuilder) -> Self {
        Self {
            service: BookService::new(Arc::new(SqliteBookRepository::new(pool)), links),
        }
    }
}

#[async_trait]
impl Module for BookModule {
    fn name(&self) -> &'static str {
        "book"
    }

    async fn init(&self, ctx: &InitCtx<'_>) -> anyhow::Result<()> {
        tracing::info!(
            module = self.name(),
            environment = ?ctx.settings.environment,
            "book module initialized"
        );
        Ok(())
    }

    fn routes(&self) -> Router {
        routes::router(self.service.clone())
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let book = serde_json::json!({ "$ref": "#/components/schemas/Book" });
        let error = serde_json::json!({ "$ref": "#/components/schemas/ErrorResponse" });
        let id_param = serde_json::json!([
            { "name": "id", "in": "path", "required": true, "schema": { "type": "integer" } }
        ]);

        Some(serde_json::json!({
            "paths": {
                "/": {
                    "get": {
                        "summary": "Find all books",
                        "tags": ["Book"],
                        "responses": { "200": { "description": "Page of books" } }
                    },
                    "post": {
                        "summary": "Add a new book",
                        "tags": ["Book"],
                        "requestBody": { "content": { "application/json": { "schema": book } } },
                        "responses": {
                            "200": { "description": "Created book", "content": { "application/json": { "schema": book } } },
                            "400": { "description": "Missing or malformed body", "content": { "application/json": { "schema": error } } }
                        }
                    },
                    "put": {
                        "summary": "Update a book",
                        "tags": ["Book"],
                        "requestBody": { "content": { "application/json": { "schema": book } } },
                        "responses": {
                            "200": { "description": "Updated book", "content": { "application/json": { "schema": book } } },
                            "404": { "description": "Unknown id", "content": { "application/json": { "schema": error } } }
                        }
                    }
                },
                "/{id}": {
                    "get": {
                        "summary": "Find a book",
                        "tags": ["Book"],
                        "parameters": id_param,
                        "responses": {
                            "200": { "description": "Book", "content": { "application/json": { "schema": book } } },
                            "404": { "description": "Unknown id", "content": { "application/json": { "schema": error } } }
                        }
                    },
                    "delete": {
                        "summary": "Delete a book",
                        "tags": ["Book"],
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
                    "Book": {
                        "type": "object",
                        "properties": {
                            "id": { "type": "integer" },
                            "author": { "type": "string" },
                            "launch_date": { "type": "string", "format": "date" },
                            "price": { "type": "number" },
                            "title": { "type": "string" },
                            "links": { "type": "array", "items": { "$ref": "#/components/schemas/Link" } }
                        },
                        "required": ["launch_date"]
                    }
                }
            }
        }))
    }

    fn migrations(&self) -> Vec<Migration> {
        vec![Migration {
            id: "001_create_book",
            up: MIGRATION_SQL,
        }]
    }
}

pub fn create_module(pool: SqlitePool, links: LinkBuilder) -> Arc<dyn Module> {
    Arc::new(BookModule::new(pool, links))
}
