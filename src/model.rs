use thiserror::Error;

/// Raised when an input falls outside the physically valid domain of a
/// formula.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum DomainError {
    #[error("{0} must be finite (got {1})")]
    NonFinite(&'static str, f64),
    #[error("{0} must be non-negative (got {1})")]
    Negative(&'static str, f64),
    #[error("{0} must be positive (got {1})")]
    NonPositive(&'static str, f64),
    #[error("{name} height ({height} m) must be above the displacement height ({displacement} m)")]
    BelowDisplacement {
        name: &'static str,
        height: f64,
        displacement: f64,
    },
    #[error("{name} height ({height} m) must be above the roughness layer top ({top} m)")]
    WithinRoughnessLayer {
        name: &'static str,
        height: f64,
        top: f64,
    },
    #[error("temperature must be above absolute zero (got {0} °C)")]
    AbsoluteZero(f64),
    #[error("aerodynamic resistance must be non-zero")]
    ZeroAerodynamicResistance,
    #[error("Penman-Monteith denominator is zero (delta_svp + psy * (1 + rs / ra) = 0)")]
    ZeroDenominator,
}

/// Errors of the array layer, wrapping the domain error of the first
/// rejected element.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("operands could not be broadcast together with shapes {0:?}")]
    Broadcast(Vec<Vec<usize>>),
    #[error("element {index}: {source}")]
    Element { index: usize, source: DomainError },
    #[error(transparent)]
    Domain(#[from] DomainError),
}

#[cfg(feature = "python")]
impl From<Error> for pyo3::PyErr {
    fn from(err: Error) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(feature = "python")]
impl From<DomainError> for pyo3::PyErr {
    fn from(err: DomainError) -> pyo3::PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

pub(crate) fn finite(name: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite(name, value))
    }
}

pub(crate) fn non_negative(
    name: &'static str,
    value: f64,
) -> Result<f64, DomainError> {
    if finite(name, value)? < 0.0 {
        Err(DomainError::Negative(name, value))
    } else {
        Ok(value)
    }
}

pub(crate) fn positive(
    name: &'static str,
    value: f64,
) -> Result<f64, DomainError> {
    if finite(name, value)? <= 0.0 {
        Err(DomainError::NonPositive(name, value))
    } else {
        Ok(value)
    }
}
