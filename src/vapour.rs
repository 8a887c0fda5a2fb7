//! Producers of the vapour pressure and psychrometric inputs of the
//! Penman-Monteith combiner (FAO-56 equations 7, 8, 11 and 13).

use crate::model::{finite, positive, DomainError};

/// Saturation vapour pressure (kPa) at temperature `t` (°C).
pub fn saturation_vapour_pressure(t: f64) -> Result<f64, DomainError> {
    let t = tetens_temperature(t)?;
    Ok(0.6108 * (17.27 * t / (t + 237.3)).exp())
}

/// Slope of the saturation vapour pressure curve (kPa °C-1) at `t` (°C).
pub fn svp_slope(t: f64) -> Result<f64, DomainError> {
    let svp = saturation_vapour_pressure(t)?;
    Ok(4098. * svp / (t + 237.3).powi(2))
}

/// Atmospheric pressure (kPa) at `altitude` (m) above sea level.
pub fn atmospheric_pressure(altitude: f64) -> Result<f64, DomainError> {
    let base = 293. - 0.0065 * finite("altitude", altitude)?;
    if base <= 0. {
        return Err(DomainError::NonPositive("temperature lapse base", base));
    }
    Ok(101.3 * (base / 293.).powf(5.26))
}

/// Psychrometric constant (kPa °C-1) at pressure `pres` (kPa).
pub fn psychrometric_constant(pres: f64) -> Result<f64, DomainError> {
    Ok(0.000665 * positive("atmospheric pressure", pres)?)
}

// the Tetens form diverges at -237.3 °C
fn tetens_temperature(t: f64) -> Result<f64, DomainError> {
    if finite("temperature", t)? <= -237.3 {
        Err(DomainError::NonPositive("temperature + 237.3", t + 237.3))
    } else {
        Ok(t)
    }
}

/// Saturation and actual vapour pressure (kPa) with the slope of the
/// saturation curve (kPa °C-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VaporPressureState {
    pub saturation: f64,
    pub actual: f64,
    pub slope: f64,
}

impl VaporPressureState {
    pub fn from_temperature(t: f64, actual: f64) -> Result<Self, DomainError> {
        Ok(Self {
            saturation: saturation_vapour_pressure(t)?,
            actual: finite("actual vapour pressure", actual)?,
            slope: svp_slope(t)?,
        })
    }

    /// Vapour pressure deficit (kPa).
    pub fn deficit(&self) -> f64 {
        self.saturation - self.actual
    }
}
