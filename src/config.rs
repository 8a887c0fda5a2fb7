//! Parameter sets with FAO-56 defaults.
//!
//! Every struct deserializes with `#[serde(default)]`, so a partial document
//! only overrides the fields it names.

use serde::{Deserialize, Serialize};

/// Clipped-grass reference crop height (m).
pub const REFERENCE_CROP_HEIGHT: f64 = 0.12;
/// Specific heat of moist air (MJ kg-1 °C-1).
pub const SPECIFIC_HEAT: f64 = 0.001013;

/// Heights of the wind (zm) and humidity (zh) measurements (m).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeasurementHeights {
    pub wind: f64,
    pub humidity: f64,
}

impl Default for MeasurementHeights {
    fn default() -> Self {
        Self {
            wind: 10.0,
            humidity: 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicConfig {
    pub heights: MeasurementHeights,
    pub von_karman: f64,
}

impl Default for AerodynamicConfig {
    fn default() -> Self {
        Self {
            heights: MeasurementHeights::default(),
            von_karman: 0.41,
        }
    }
}

/// Bulk stomatal resistance of the well-illuminated leaf (s m-1).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub stomatal_resistance: f64,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            stomatal_resistance: 100.0,
        }
    }
}

/// Values the combiner falls back on when the caller does not derive them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombinerConfig {
    pub surface_resistance: f64,
    pub specific_heat: f64,
}

impl Default for CombinerConfig {
    fn default() -> Self {
        Self {
            surface_resistance: 78.0,
            specific_heat: SPECIFIC_HEAT,
        }
    }
}

/// Configuration of the full derivation chain, from crop height to ET.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EtConfig {
    pub crop_height: f64,
    pub aerodynamic: AerodynamicConfig,
    pub surface: SurfaceConfig,
    pub specific_heat: f64,
}

impl Default for EtConfig {
    fn default() -> Self {
        Self {
            crop_height: REFERENCE_CROP_HEIGHT,
            aerodynamic: AerodynamicConfig::default(),
            surface: SurfaceConfig::default(),
            specific_heat: SPECIFIC_HEAT,
        }
    }
}
