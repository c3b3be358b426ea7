use thiserror::Error;

/// Top-level error type for the Brachis simulation kernel.
#[derive(Debug, Error)]
pub enum BrachisError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Errors related to curve construction and evaluation.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate curve: {0}")]
    DegenerateCurve(String),
}

/// Errors related to descent-time integration.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("invalid integration parameters: {0}")]
    InvalidIntegrationParameters(String),

    #[error("curve evaluated to a non-finite point at parameter {parameter}")]
    NonFiniteEvaluation { parameter: f64 },
}

/// Convenience type alias for results using [`BrachisError`].
pub type Result<T> = std::result::Result<T, BrachisError>;
