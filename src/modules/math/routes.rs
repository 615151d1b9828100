use axum::{extract::Path, routing::get, Json, Router};
use erudio_http::error::AppError;

use super::{converter::convert_to_double, operations};

pub fn router() -> Router {
    Router::new()
        .route("/sum/{number_one}/{number_two}", get(sum))
        .route("/subtraction/{number_one}/{number_two}", get(subtraction))
        .route("/multiplication/{number_one}/{number_two}", get(multiplication))
        .route("/division/{number_one}/{number_two}", get(division))
        .route("/mean/{number_one}/{number_two}", get(mean))
        .route("/squareRoot/{number}", get(square_root))
}

fn operands(number_one: &str, number_two: &str) -> Result<(f64, f64), AppError> {
    Ok((convert_to_double(number_one)?, convert_to_double(number_two)?))
}

async fn sum(Path((a, b)): Path<(String, String)>) -> Result<Json<f64>, AppError> {
    let (a, b) = operands(&a, &b)?;
    Ok(Json(operations::sum(a, b)))
}

async fn subtraction(Path((a, b)): Path<(String, String)>) -> Result<Json<f64>, AppError> {
    let (a, b) = operands(&a, &b)?;
    Ok(Json(operations::subtraction(a, b)))
}

async fn multiplication(Path((a, b)): Path<(String, String)>) -> Result<Json<f64>, AppError> {
    let (a, b) = operands(&a, &b)?;
    Ok(Json(operations::multiplication(a, b)))
}

async fn division(Path((a, b)): Path<(String, String)>) -> Result<Json<f64>, AppError> {
    let (a, b) = operands(&a, &b)?;
    Ok(Json(operations::division(a, b)?))
}

async fn mean(Path((a, b)): Path<(String, String)>) -> Result<Json<f64>, AppError> {
    let (a, b) = operands(&a, &b)?;
    Ok(Json(operations::mean(a, b)))
}

async fn square_root(Path(number): Path<String>) -> Result<Json<f64>, AppError> {
    Ok(Json(operations::square_root(convert_to_double(&number)?)?))
}
