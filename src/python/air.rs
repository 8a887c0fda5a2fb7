use pyo3::prelude::*;

use super::{to_python, ArrayLike};
use crate::vectorized;

#[pyfunction]
#[pyo3(name = "latent_heat")]
pub fn py_latent_heat<'py>(
    py: Python<'py>,
    t: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    Ok(to_python(py, vectorized::latent_heat(t.to_array().view())?))
}

#[pyfunction]
#[pyo3(name = "density")]
pub fn py_density<'py>(
    py: Python<'py>,
    pres: ArrayLike<'py>,
    t: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let pa =
        vectorized::air_density(pres.to_array().view(), t.to_array().view())?;
    Ok(to_python(py, pa))
}

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "air")?;
    m.add_function(wrap_pyfunction!(py_latent_heat, &m)?)?;
    m.add_function(wrap_pyfunction!(py_density, &m)?)?;
    Ok(m)
}
