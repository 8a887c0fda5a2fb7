use pyo3::prelude::*;

use super::{to_python, ArrayLike};
use crate::config::{AerodynamicConfig, MeasurementHeights};
use crate::vectorized;

#[pyfunction]
#[pyo3(name = "aerodynamic", signature = (d, zom, zoh, ws, zh = 2.0, zm = 10.0, k = 0.41))]
#[allow(clippy::too_many_arguments)]
pub fn py_aerodynamic<'py>(
    py: Python<'py>,
    d: ArrayLike<'py>,
    zom: ArrayLike<'py>,
    zoh: ArrayLike<'py>,
    ws: ArrayLike<'py>,
    zh: f64,
    zm: f64,
    k: f64,
) -> PyResult<Bound<'py, PyAny>> {
    let config = AerodynamicConfig {
        heights: MeasurementHeights {
            wind: zm,
            humidity: zh,
        },
        von_karman: k,
    };
    let ra = vectorized::aerodynamic_resistance(
        d.to_array().view(),
        zom.to_array().view(),
        zoh.to_array().view(),
        ws.to_array().view(),
        &config,
    )?;
    Ok(to_python(py, ra))
}

#[pyfunction]
#[pyo3(name = "surface", signature = (lai_active, rl = ArrayLike::Scalar(100.0)))]
pub fn py_surface<'py>(
    py: Python<'py>,
    lai_active: ArrayLike<'py>,
    rl: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let rs = vectorized::surface_resistance(
        lai_active.to_array().view(),
        rl.to_array().view(),
    )?;
    Ok(to_python(py, rs))
}

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "resistance")?;
    m.add_function(wrap_pyfunction!(py_aerodynamic, &m)?)?;
    m.add_function(wrap_pyfunction!(py_surface, &m)?)?;
    Ok(m)
}
