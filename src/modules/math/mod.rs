pub mod converter;
pub mod operations;
pub mod routes;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use erudio_http::error::AppError;
use erudio_kernel::Module;

use operations::MathError;

impl From<MathError> for AppError {
    fn from(error: MathError) -> Self {
        AppError::unsupported_operation(error.to_string())
    }
}

/// Calculator endpoints served from the root path
pub struct MathModule;

#[async_trait]
impl Module for MathModule {
    fn name(&self) -> &'static str {
        "math"
    }

    fn base_path(&self) -> Option<String> {
        None
    }

    fn routes(&self) -> Router {
        routes::router()
    }

    fn openapi(&self) -> Option<serde_json::Value> {
        let mut paths = serde_json::Map::new();
        for operation in ["sum", "subtraction", "multiplication", "division", "mean"] {
            paths.insert(
                format!("/{}/{{number_one}}/{{number_two}}", operation),
                binary_operation(operation),
            );
        }
        paths.insert(
            "/squareRoot/{number}".to_string(),
            serde_json::json!({
                "get": {
                    "summary": "squareRoot",
                    "tags": ["Math"],
                    "parameters": [
                        { "name": "number", "in": "path", "required": true, "schema": { "type": "string" } }
                    ],
                    "responses": {
                        "200": { "description": "Result", "content": { "application/json": { "schema": { "type": "number" } } } },
                        "400": { "description": "Not numeric or negative", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } } }
                    }
                }
            }),
        );

        Some(serde_json::json!({ "paths": paths }))
    }
}

fn binary_operation(summary: &str) -> serde_json::Value {
    serde_json::json!({
        "get": {
            "summary": summary,
            "tags": ["Math"],
            "parameters": [
                { "name": "number_one", "in": "path", "required": true, "schema": { "type": "string" } },
                { "name": "number_two", "in": "path", "required": true, "schema": { "type": "string" } }
            ],
            "responses": {
                "200": { "description": "Result", "content": { "application/json": { "schema": { "type": "number" } } } },
                "400": { "description": "Operand is not numeric", "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } } }
            }
        }
    })
}

pub fn create_module() -> Arc<dyn Module> {
    Arc::new(MathModule)
}
