use pyo3::prelude::*;

use super::{to_python, ArrayLike};
use crate::config::{
    AerodynamicConfig, EtConfig, MeasurementHeights, SurfaceConfig,
    REFERENCE_CROP_HEIGHT, SPECIFIC_HEAT,
};
use crate::vectorized::{self, PenmanMonteithArrays, WeatherArrays};

#[pyfunction]
#[pyo3(
    name = "penman_monteith",
    signature = (
        lat, net_rad, svp, avp, delta_svp, psy, ra, pa,
        rs = ArrayLike::Scalar(78.0),
        cp = ArrayLike::Scalar(SPECIFIC_HEAT),
        shf = ArrayLike::Scalar(0.0)
    )
)]
#[allow(clippy::too_many_arguments)]
pub fn py_penman_monteith<'py>(
    py: Python<'py>,
    lat: ArrayLike<'py>,
    net_rad: ArrayLike<'py>,
    svp: ArrayLike<'py>,
    avp: ArrayLike<'py>,
    delta_svp: ArrayLike<'py>,
    psy: ArrayLike<'py>,
    ra: ArrayLike<'py>,
    pa: ArrayLike<'py>,
    rs: ArrayLike<'py>,
    cp: ArrayLike<'py>,
    shf: ArrayLike<'py>,
) -> PyResult<Bound<'py, PyAny>> {
    let lat_ = lat.to_array();
    let net_rad_ = net_rad.to_array();
    let shf_ = shf.to_array();
    let svp_ = svp.to_array();
    let avp_ = avp.to_array();
    let delta_svp_ = delta_svp.to_array();
    let psy_ = psy.to_array();
    let ra_ = ra.to_array();
    let pa_ = pa.to_array();
    let rs_ = rs.to_array();
    let cp_ = cp.to_array();

    let et = vectorized::penman_monteith(&PenmanMonteithArrays {
        latent_heat: lat_.view(),
        net_radiation: net_rad_.view(),
        soil_heat_flux: shf_.view(),
        saturation_vapour_pressure: svp_.view(),
        actual_vapour_pressure: avp_.view(),
        svp_slope: delta_svp_.view(),
        psychrometric_constant: psy_.view(),
        aerodynamic_resistance: ra_.view(),
        air_density: pa_.view(),
        surface_resistance: rs_.view(),
        specific_heat: cp_.view(),
    })?;
    Ok(to_python(py, et))
}

#[pyfunction]
#[pyo3(
    name = "crop_evapotranspiration",
    signature = (
        t, ws, pres, net_rad, svp, avp, delta_svp, psy,
        shf = ArrayLike::Scalar(0.0),
        h = REFERENCE_CROP_HEIGHT,
        zh = 2.0,
        zm = 10.0,
        k = 0.41,
        rl = 100.0,
        cp = SPECIFIC_HEAT
    )
)]
#[allow(clippy::too_many_arguments)]
pub fn py_crop_evapotranspiration<'py>(
    py: Python<'py>,
    t: ArrayLike<'py>,
    ws: ArrayLike<'py>,
    pres: ArrayLike<'py>,
    net_rad: ArrayLike<'py>,
    svp: ArrayLike<'py>,
    avp: ArrayLike<'py>,
    delta_svp: ArrayLike<'py>,
    psy: ArrayLike<'py>,
    shf: ArrayLike<'py>,
    h: f64,
    zh: f64,
    zm: f64,
    k: f64,
    rl: f64,
    cp: f64,
) -> PyResult<Bound<'py, PyAny>> {
    let config = EtConfig {
        crop_height: h,
        aerodynamic: AerodynamicConfig {
            heights: MeasurementHeights {
                wind: zm,
                humidity: zh,
            },
            von_karman: k,
        },
        surface: SurfaceConfig {
            stomatal_resistance: rl,
        },
        specific_heat: cp,
    };

    let t_ = t.to_array();
    let ws_ = ws.to_array();
    let pres_ = pres.to_array();
    let net_rad_ = net_rad.to_array();
    let shf_ = shf.to_array();
    let svp_ = svp.to_array();
    let avp_ = avp.to_array();
    let delta_svp_ = delta_svp.to_array();
    let psy_ = psy.to_array();

    let et = vectorized::crop_evapotranspiration(
        &WeatherArrays {
            temperature: t_.view(),
            wind_speed: ws_.view(),
            pressure: pres_.view(),
            net_radiation: net_rad_.view(),
            soil_heat_flux: shf_.view(),
            saturation_vapour_pressure: svp_.view(),
            actual_vapour_pressure: avp_.view(),
            svp_slope: delta_svp_.view(),
            psychrometric_constant: psy_.view(),
        },
        &config,
    )?;
    Ok(to_python(py, et))
}

pub fn make_module(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let m = PyModule::new(py, "pet")?;
    m.add_function(wrap_pyfunction!(py_penman_monteith, &m)?)?;
    m.add_function(wrap_pyfunction!(py_crop_evapotranspiration, &m)?)?;
    Ok(m)
}
