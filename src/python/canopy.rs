use pyo3::prelude::*;

use super::{to_python, ArrayLike};
use crate::config::REFERENCE_CROP_HEIGHT;
use crate::vectorized;

#[pyfunction]
#[pyo3(name = "displacement_height", signature = (h = ArrayLike::Scalar(REFERENCE_CROP_HEIGHT)))]
pub fn py_displacement_height<'py>(
    py: Python<'py>,
    h: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let d = vectorized::displacement_height(h.to_array().view())?;
    Ok(to_python(py, d))
}

#[pyfunction]
#[pyo3(name = "momentum_roughness", signature = (h = ArrayLike::Scalar(REFERENCE_CROP_HEIGHT)))]
pub fn py_momentum_roughness<'py>(
    py: Python<'py>,
    h: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let zom = vectorized::momentum_roughness(h.to_array().view())?;
    Ok(to_python(py, zom))
}

#[pyfunction]
#[pyo3(name = "heat_roughness")]
pub fn py_heat_roughness<'py>(
    py: Python<'py>,
    zom: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let zoh = vectorized::heat_roughness(zom.to_array().view())?;
    Ok(to_python(py, zoh))
}

#[pyfunction]
#[pyo3(name = "leaf_area_index", signature = (h = ArrayLike::Scalar(REFERENCE_CROP_HEIGHT)))]
pub fn py_leaf_area_index<'py>(
    py: Python<'py>,
    h: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let lai = vectorized::leaf_area_index(h.to_array().view())?;
    Ok(to_python(py, lai))
}

#[pyfunction]
#[pyo3(name = "active_leaf_area_index")]
pub fn py_active_leaf_area_index<'py>(
    py: Python<'py>,
    lai: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let lai_active = vectorized::active_leaf_area_index(lai.to_array().view())?;
    Ok(to_python(py, lai_active))
}

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "canopy")?;
    m.add_function(wrap_pyfunction!(py_displacement_height, &m)?)?;
    m.add_function(wrap_pyfunction!(py_momentum_roughness, &m)?)?;
    m.add_function(wrap_pyfunction!(py_heat_roughness, &m)?)?;
    m.add_function(wrap_pyfunction!(py_leaf_area_index, &m)?)?;
    m.add_function(wrap_pyfunction!(py_active_leaf_area_index, &m)?)?;
    Ok(m)
}
