use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MathError {
    #[error("Please set a numeric value!")]
    NotNumeric,

    #[error("Division by zero is not allowed!")]
    DivisionByZero,

    #[error("Square root of a negative number is not allowed!")]
    NegativeSquareRoot,
}

pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

pub fn subtraction(a: f64, b: f64) -> f64 {
    a - b
}

pub fn multiplication(a: f64, b: f64) -> f64 {
    a * b
}

pub fn division(a: f64, b: f64) -> Result<f64, MathError> {
    if b == 0.0 {
        return Err(MathError::DivisionByZero);
    }
    Ok(a / b)
}

pub fn mean(a: f64, b: f64) -> f64 {
    (a + b) / 2.0
}

pub fn square_root(n: f64) -> Result<f64, MathError> {
    if n < 0.0 {
        return Err(MathError::NegativeSquareRoot);
    }
    Ok(n.sqrt())
}
