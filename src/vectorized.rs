//! Array counterparts of every scalar operation.
//!
//! Inputs broadcast against each other following numpy rules. Elements are
//! evaluated in row-major order and the first rejected element aborts the
//! whole call with [`Error::Element`], carrying its flat index.

use ndarray::{indices, ArrayD, ArrayViewD, Dimension, IxDyn};
use tracing::debug;

use crate::config::{AerodynamicConfig, EtConfig};
use crate::model::{DomainError, Error};
use crate::pet::{PenmanMonteith, RadiationBalance, Weather};
use crate::vapour::VaporPressureState;
use crate::{air, canopy, pet, resistance, vapour};

/// Shape obtained by broadcasting `shapes` together.
pub fn broadcast_shape(shapes: &[&[usize]]) -> Result<Vec<usize>, Error> {
    let ndim = shapes.iter().map(|s| s.len()).max().unwrap_or(0);
    let mut shape = vec![1; ndim];
    for s in shapes {
        let offset = ndim - s.len();
        for (axis, &len) in s.iter().enumerate() {
            let target = &mut shape[offset + axis];
            if *target == 1 {
                *target = len;
            } else if len != 1 && len != *target {
                return Err(broadcast_error(shapes));
            }
        }
    }
    Ok(shape)
}

fn broadcast_error(shapes: &[&[usize]]) -> Error {
    Error::Broadcast(shapes.iter().map(|s| s.to_vec()).collect())
}

/// Broadcast `inputs` and apply `f` to each element, passing one value per
/// input in the order given.
pub fn map_elementwise<F>(
    inputs: &[ArrayViewD<'_, f64>],
    f: F,
) -> Result<ArrayD<f64>, Error>
where
    F: Fn(&[f64]) -> Result<f64, DomainError>,
{
    let shapes: Vec<&[usize]> = inputs.iter().map(|a| a.shape()).collect();
    let shape = broadcast_shape(&shapes)?;
    let views = inputs
        .iter()
        .map(|a| a.broadcast(IxDyn(&shape)))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| broadcast_error(&shapes))?;

    let mut args = vec![0.; views.len()];
    let mut values = Vec::with_capacity(shape.iter().product());
    for (flat, index) in indices(IxDyn(&shape)).into_iter().enumerate() {
        for (arg, view) in args.iter_mut().zip(&views) {
            *arg = view[index.slice()];
        }
        match f(&args) {
            Ok(value) => values.push(value),
            Err(source) => {
                debug!(index = flat, error = %source, "element rejected");
                return Err(Error::Element {
                    index: flat,
                    source,
                });
            }
        }
    }

    ArrayD::from_shape_vec(IxDyn(&shape), values)
        .map_err(|_| broadcast_error(&shapes))
}

pub fn displacement_height(h: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[h], |x| canopy::displacement_height(x[0]))
}

pub fn momentum_roughness(h: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[h], |x| canopy::momentum_roughness(x[0]))
}

pub fn heat_roughness(zom: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[zom], |x| canopy::heat_roughness(x[0]))
}

pub fn leaf_area_index(h: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[h], |x| canopy::leaf_area_index(x[0]))
}

pub fn active_leaf_area_index(
    lai: ArrayViewD<f64>,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[lai], |x| canopy::active_leaf_area_index(x[0]))
}

pub fn aerodynamic_resistance(
    d: ArrayViewD<f64>,
    zom: ArrayViewD<f64>,
    zoh: ArrayViewD<f64>,
    ws: ArrayViewD<f64>,
    config: &AerodynamicConfig,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[d, zom, zoh, ws], |x| {
        resistance::aerodynamic_resistance(x[0], x[1], x[2], x[3], config)
    })
}

pub fn surface_resistance(
    lai_active: ArrayViewD<f64>,
    rl: ArrayViewD<f64>,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[lai_active, rl], |x| {
        resistance::surface_resistance(x[0], x[1])
    })
}

pub fn latent_heat(t: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[t], |x| air::latent_heat(x[0]))
}

pub fn air_density(
    pres: ArrayViewD<f64>,
    t: ArrayViewD<f64>,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[pres, t], |x| air::air_density(x[0], x[1]))
}

pub fn saturation_vapour_pressure(
    t: ArrayViewD<f64>,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[t], |x| vapour::saturation_vapour_pressure(x[0]))
}

pub fn svp_slope(t: ArrayViewD<f64>) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[t], |x| vapour::svp_slope(x[0]))
}

pub fn atmospheric_pressure(
    altitude: ArrayViewD<f64>,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[altitude], |x| vapour::atmospheric_pressure(x[0]))
}

pub fn psychrometric_constant(
    pres: ArrayViewD<f64>,
) -> Result<ArrayD<f64>, Error> {
    map_elementwise(&[pres], |x| vapour::psychrometric_constant(x[0]))
}

/// Array form of [`PenmanMonteith`].
#[derive(Debug, Clone)]
pub struct PenmanMonteithArrays<'a> {
    pub latent_heat: ArrayViewD<'a, f64>,
    pub net_radiation: ArrayViewD<'a, f64>,
    pub soil_heat_flux: ArrayViewD<'a, f64>,
    pub saturation_vapour_pressure: ArrayViewD<'a, f64>,
    pub actual_vapour_pressure: ArrayViewD<'a, f64>,
    pub svp_slope: ArrayViewD<'a, f64>,
    pub psychrometric_constant: ArrayViewD<'a, f64>,
    pub aerodynamic_resistance: ArrayViewD<'a, f64>,
    pub air_density: ArrayViewD<'a, f64>,
    pub surface_resistance: ArrayViewD<'a, f64>,
    pub specific_heat: ArrayViewD<'a, f64>,
}

pub fn penman_monteith(
    inputs: &PenmanMonteithArrays,
) -> Result<ArrayD<f64>, Error> {
    let operands = [
        inputs.latent_heat.view(),
        inputs.net_radiation.view(),
        inputs.soil_heat_flux.view(),
        inputs.saturation_vapour_pressure.view(),
        inputs.actual_vapour_pressure.view(),
        inputs.svp_slope.view(),
        inputs.psychrometric_constant.view(),
        inputs.aerodynamic_resistance.view(),
        inputs.air_density.view(),
        inputs.surface_resistance.view(),
        inputs.specific_heat.view(),
    ];
    map_elementwise(&operands, |x| {
        pet::penman_monteith(&PenmanMonteith {
            latent_heat: x[0],
            radiation: RadiationBalance {
                net_radiation: x[1],
                soil_heat_flux: x[2],
            },
            vapour: VaporPressureState {
                saturation: x[3],
                actual: x[4],
                slope: x[5],
            },
            psychrometric_constant: x[6],
            aerodynamic_resistance: x[7],
            air_density: x[8],
            surface_resistance: x[9],
            specific_heat: x[10],
        })
    })
}

/// Array form of [`Weather`].
#[derive(Debug, Clone)]
pub struct WeatherArrays<'a> {
    pub temperature: ArrayViewD<'a, f64>,
    pub wind_speed: ArrayViewD<'a, f64>,
    pub pressure: ArrayViewD<'a, f64>,
    pub net_radiation: ArrayViewD<'a, f64>,
    pub soil_heat_flux: ArrayViewD<'a, f64>,
    pub saturation_vapour_pressure: ArrayViewD<'a, f64>,
    pub actual_vapour_pressure: ArrayViewD<'a, f64>,
    pub svp_slope: ArrayViewD<'a, f64>,
    pub psychrometric_constant: ArrayViewD<'a, f64>,
}

pub fn crop_evapotranspiration(
    weather: &WeatherArrays,
    config: &EtConfig,
) -> Result<ArrayD<f64>, Error> {
    let operands = [
        weather.temperature.view(),
        weather.wind_speed.view(),
        weather.pressure.view(),
        weather.net_radiation.view(),
        weather.soil_heat_flux.view(),
        weather.saturation_vapour_pressure.view(),
        weather.actual_vapour_pressure.view(),
        weather.svp_slope.view(),
        weather.psychrometric_constant.view(),
    ];
    map_elementwise(&operands, |x| {
        let weather = Weather {
            temperature: x[0],
            wind_speed: x[1],
            pressure: x[2],
            radiation: RadiationBalance {
                net_radiation: x[3],
                soil_heat_flux: x[4],
            },
            vapour: VaporPressureState {
                saturation: x[5],
                actual: x[6],
                slope: x[7],
            },
            psychrometric_constant: x[8],
        };
        pet::crop_evapotranspiration(&weather, config)
    })
}
