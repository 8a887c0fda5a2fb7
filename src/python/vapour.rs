use pyo3::prelude::*;

use super::{to_python, ArrayLike};
use crate::vectorized;

#[pyfunction]
#[pyo3(name = "saturation_vapour_pressure")]
pub fn py_saturation_vapour_pressure<'py>(
    py: Python<'py>,
    t: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let svp = vectorized::saturation_vapour_pressure(t.to_array().view())?;
    Ok(to_python(py, svp))
}

#[pyfunction]
#[pyo3(name = "svp_slope")]
pub fn py_svp_slope<'py>(
    py: Python<'py>,
    t: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    Ok(to_python(py, vectorized::svp_slope(t.to_array().view())?))
}

#[pyfunction]
#[pyo3(name = "atmospheric_pressure")]
pub fn py_atmospheric_pressure<'py>(
    py: Python<'py>,
    altitude: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let pres = vectorized::atmospheric_pressure(altitude.to_array().view())?;
    Ok(to_python(py, pres))
}

#[pyfunction]
#[pyo3(name = "psychrometric_constant")]
pub fn py_psychrometric_constant<'py>(
    py: Python<'py>,
    pres: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let psy = vectorized::psychrometric_constant(pres.to_array().view())?;
    Ok(to_python(py, psy))
}

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "vapour")?;
    m.add_function(wrap_pyfunction!(py_saturation_vapour_pressure, &m)?)?;
    m.add_function(wrap_pyfunction!(py_svp_slope, &m)?)?;
    m.add_function(wrap_pyfunction!(py_atmospheric_pressure, &m)?)?;
    m.add_function(wrap_pyfunction!(py_psychrometric_constant, &m)?)?;
    Ok(m)
}
