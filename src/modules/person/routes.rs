use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Router,
};
use erudio_db::PageQuery;
use erudio_http::{
    error::AppError,
    hateoas::PagedModel,
    negotiate::{Accept, Negotiated, Payload},
};

use super::{
    models::{PersonVo, PersonVoV2},
    service::PersonService,
};

pub fn router(service: PersonService) -> Router {
    Router::new()
        .route("/", get(find_all).post(create).put(update))
        .route("/v2", post(create_v2))
        .route("/findPersonByName/{first_name}", get(find_by_name))
        .route("/{id}", get(find_by_id).patch(disable).delete(delete))
        .with_state(service)
}

async fn find_all(
    State(service): State<PersonService>,
    accept: Accept,
    Query(query): Query<PageQuery>,
) -> Result<Negotiated<PagedModel<PersonVo>>, AppError> {
    let people = service.find_all(query.into_pageable()).await?;
    Ok(Negotiated::new(accept, people))
}

async fn find_by_name(
    State(service): State<PersonService>,
    accept: Accept,
    Path(first_name): Path<String>,
    Query(query): Query<PageQuery>,
) -> Result<Negotiated<PagedModel<PersonVo>>, AppError> {
    let people = service
        .find_by_name(&first_name, query.into_pageable())
        .await?;
    Ok(Negotiated::new(accept, people))
}

async fn find_by_id(
    State(service): State<PersonService>,
    accept: Accept,
    Path(id): Path<i64>,
) -> Result<Negotiated<PersonVo>, AppError> {
    Ok(Negotiated::new(accept, service.find_by_key(id).await?))
}

async fn create(
    State(service): State<PersonService>,
    accept: Accept,
    Payload(person): Payload<PersonVo>,
) -> Result<Negotiated<PersonVo>, AppError> {
    Ok(Negotiated::new(accept, service.create(person).await?))
}

async fn create_v2(
    State(service): State<PersonService>,
    accept: Accept,
    Payload(person): Payload<PersonVoV2>,
) -> Result<Negotiated<PersonVoV2>, AppError> {
    Ok(Negotiated::new(accept, service.create_v2(person).await?))
}

async fn update(
    State(service): State<PersonService>,
    accept: Accept,
    Payload(person): Payload<PersonVo>,
) -> Result<Negotiated<PersonVo>, AppError> {
    Ok(Negotiated::new(accept, service.update(person).await?))
}

async fn disable(
    State(service): State<PersonService>,
    accept: Accept,
    Path(id): Path<i64>,
) -> Result<Negotiated<PersonVo>, AppError> {
    Ok(Negotiated::new(accept, service.disable(id).await?))
}

async fn delete(
    State(service): State<PersonService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
