use tracing::trace;

use crate::air::AirState;
use crate::canopy::CropGeometry;
use crate::config::{CombinerConfig, EtConfig};
use crate::model::{finite, positive, DomainError};
use crate::vapour::VaporPressureState;

const SECONDS_PER_DAY: f64 = 86400.;

/// Net radiation at the crop surface and soil heat flux (MJ m-2 day-1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiationBalance {
    pub net_radiation: f64,
    pub soil_heat_flux: f64,
}

impl RadiationBalance {
    /// Soil heat flux is negligible at daily and 10-day time steps.
    pub fn daily(net_radiation: f64) -> Self {
        Self {
            net_radiation,
            soil_heat_flux: 0.,
        }
    }
}

/// Inputs of the Penman-Monteith combination equation, all already
/// derived.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PenmanMonteith {
    /// latent heat of vaporization (MJ kg-1)
    pub latent_heat: f64,
    pub radiation: RadiationBalance,
    pub vapour: VaporPressureState,
    /// psychrometric constant (kPa °C-1)
    pub psychrometric_constant: f64,
    /// aerodynamic resistance (s m-1)
    pub aerodynamic_resistance: f64,
    /// air density (kg m-3)
    pub air_density: f64,
    /// surface resistance (s m-1)
    pub surface_resistance: f64,
    /// specific heat of moist air (MJ kg-1 °C-1)
    pub specific_heat: f64,
}

impl PenmanMonteith {
    pub fn new(
        latent_heat: f64,
        radiation: RadiationBalance,
        vapour: VaporPressureState,
        psychrometric_constant: f64,
        aerodynamic_resistance: f64,
        air_density: f64,
    ) -> Self {
        let defaults = CombinerConfig::default();
        Self {
            latent_heat,
            radiation,
            vapour,
            psychrometric_constant,
            aerodynamic_resistance,
            air_density,
            surface_resistance: defaults.surface_resistance,
            specific_heat: defaults.specific_heat,
        }
    }

    pub fn with_surface_resistance(self, surface_resistance: f64) -> Self {
        Self {
            surface_resistance,
            ..self
        }
    }

    pub fn with_specific_heat(self, specific_heat: f64) -> Self {
        Self {
            specific_heat,
            ..self
        }
    }

    pub fn evapotranspiration(&self) -> Result<f64, DomainError> {
        penman_monteith(self)
    }
}

/// Evapotranspiration (mm day-1) from the Penman-Monteith equation
/// (FAO-56 equation 3).
pub fn penman_monteith(inputs: &PenmanMonteith) -> Result<f64, DomainError> {
    let lat = positive("latent heat of vaporization", inputs.latent_heat)?;
    let ra = finite("aerodynamic resistance", inputs.aerodynamic_resistance)?;
    if ra == 0. {
        return Err(DomainError::ZeroAerodynamicResistance);
    }
    let delta_svp = finite("svp slope", inputs.vapour.slope)?;
    let net_rad = finite("net radiation", inputs.radiation.net_radiation)?;
    let shf = finite("soil heat flux", inputs.radiation.soil_heat_flux)?;
    let svp = finite("saturation vapour pressure", inputs.vapour.saturation)?;
    let avp = finite("actual vapour pressure", inputs.vapour.actual)?;
    let psy = finite("psychrometric constant", inputs.psychrometric_constant)?;
    let pa = finite("air density", inputs.air_density)?;
    let rs = finite("surface resistance", inputs.surface_resistance)?;
    let cp = finite("specific heat", inputs.specific_heat)?;

    let radiative = delta_svp * (net_rad - shf) / SECONDS_PER_DAY
        + pa * cp * ((svp - avp) / ra);
    let denominator = delta_svp + psy * (1. + rs / ra);
    if denominator == 0. {
        return Err(DomainError::ZeroDenominator);
    }

    let et = (radiative / denominator) * (1. / lat) * SECONDS_PER_DAY;
    finite("evapotranspiration", et)
}

/// Meteorological inputs of the full derivation chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    /// air temperature at 2 m (°C)
    pub temperature: f64,
    /// wind speed at the wind measurement height (m s-1)
    pub wind_speed: f64,
    /// atmospheric pressure (kPa)
    pub pressure: f64,
    pub radiation: RadiationBalance,
    pub vapour: VaporPressureState,
    /// psychrometric constant (kPa °C-1)
    pub psychrometric_constant: f64,
}

/// Crop evapotranspiration (mm day-1), deriving every intermediate
/// quantity from crop height and weather in dependency order.
pub fn crop_evapotranspiration(
    weather: &Weather,
    config: &EtConfig,
) -> Result<f64, DomainError> {
    let geometry = CropGeometry::new(config.crop_height)?;
    let ra = geometry.aerodynamic_resistance(weather.wind_speed, &config.aerodynamic)?;
    let rs = geometry.surface_resistance(config.surface.stomatal_resistance)?;

    let air = AirState {
        pressure: weather.pressure,
        temperature: weather.temperature,
    };
    let lat = air.latent_heat()?;
    let pa = air.density()?;

    trace!(
        displacement = geometry.displacement,
        zom = geometry.momentum_roughness,
        zoh = geometry.heat_roughness,
        lai_active = geometry.lai_active,
        ra,
        rs,
        lat,
        pa,
        "derived penman-monteith terms"
    );

    PenmanMonteith::new(
        lat,
        weather.radiation,
        weather.vapour,
        weather.psychrometric_constant,
        ra,
        pa,
    )
    .with_surface_resistance(rs)
    .with_specific_heat(config.specific_heat)
    .evapotranspiration()
}
