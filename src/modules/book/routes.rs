use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Router,
};
use erudio_db::PageQuery;
use erudio_http::{
    error::AppError,
    hateoas::PagedModel,
    negotiate::{Accept, Negotiated, Payload},
};

use super::{models::BookVo, service::BookService};

pub fn router(service: BookService) -> Router {
    Router::new()
        .route("/", get(find_all).post(create).put(update))
        .route("/{id}", get(find_by_id).delete(delete))
        .with_state(service)
}

async fn find_all(
    State(service): State<BookService>,
    accept: Accept,
    Query(query): Query<PageQuery>,
) -> Result<Negotiated<PagedModel<BookVo>>, AppError> {
    let books = service.find_all(query.into_pageable()).await?;
    Ok(Negotiated::new(accept, books))
}

async fn find_by_id(
    State(service): State<BookService>,
    accept: Accept,
    Path(id): Path<i64>,
) -> Result<Negotiated<BookVo>, AppError> {
    Ok(Negotiated::new(accept, service.find_by_key(id).await?))
}

async fn create(
    State(service): State<BookService>,
    accept: Accept,
    Payload(book): Payload<BookVo>,
) -> Result<Negotiated<BookVo>, AppError> {
    Ok(Negotiated::new(accept, service.create(book).await?))
}

async fn update(
    State(service): State<BookService>,
    accept: Accept,
    Payload(book): Payload<BookVo>,
) -> Result<Negotiated<BookVo>, AppError> {
    Ok(Negotiated::new(accept, service.update(book).await?))
}

async fn delete(
    State(service): State<BookService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
