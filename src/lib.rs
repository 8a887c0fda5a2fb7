//! FAO-56 Penman-Monteith crop evapotranspiration.
//!
//! The derivation chain runs canopy geometry -> aerodynamic and surface
//! resistance -> air properties -> combination equation. Every function is
//! pure and returns a [`DomainError`] instead of propagating NaN or infinity.
//! Array versions live in [`vectorized`].

pub mod air;
pub mod canopy;
pub mod config;
pub mod model;
pub mod pet;
pub mod resistance;
pub mod vapour;
pub mod vectorized;

#[cfg(feature = "python")]
mod python;

pub use air::{air_density, latent_heat, AirState};
pub use canopy::CropGeometry;
pub use config::{
    AerodynamicConfig, CombinerConfig, EtConfig, MeasurementHeights,
    SurfaceConfig,
};
pub use model::{DomainError, Error};
pub use pet::{
    crop_evapotranspiration, penman_monteith, PenmanMonteith,
    RadiationBalance, Weather,
};
pub use resistance::{aerodynamic_resistance, surface_resistance};
pub use vapour::VaporPressureState;
