use crate::config::AerodynamicConfig;
use crate::model::{finite, positive, DomainError};

/// Aerodynamic resistance (s m-1) between the canopy and the measurement
/// heights:
///
/// ra = ln((zm - d) / zom) * ln((zh - d) / zoh) / (k^2 * ws)
///
/// * `d` - zero plane displacement height (m)
/// * `zom` - roughness length governing momentum transfer (m)
/// * `zoh` - roughness length governing heat and vapour transfer (m)
/// * `ws` - wind speed at `zm` (m s-1)
pub fn aerodynamic_resistance(
    d: f64,
    zom: f64,
    zoh: f64,
    ws: f64,
    config: &AerodynamicConfig,
) -> Result<f64, DomainError> {
    let d = finite("displacement height", d)?;
    let zom = positive("momentum roughness length", zom)?;
    let zoh = positive("heat roughness length", zoh)?;
    let ws = positive("wind speed", ws)?;
    let k = positive("von Karman constant", config.von_karman)?;
    let zm = above_displacement("wind measurement", config.heights.wind, d)?;
    let zh =
        above_displacement("humidity measurement", config.heights.humidity, d)?;
    // both log profiles must be positive for ra > 0
    above_roughness("wind measurement", zm, d, zom)?;
    above_roughness("humidity measurement", zh, d, zoh)?;

    Ok(((zm - d) / zom).ln() * ((zh - d) / zoh).ln() / (k.powi(2) * ws))
}

fn above_displacement(
    name: &'static str,
    height: f64,
    displacement: f64,
) -> Result<f64, DomainError> {
    if finite(name, height)? - displacement <= 0. {
        Err(DomainError::BelowDisplacement {
            name,
            height,
            displacement,
        })
    } else {
        Ok(height)
    }
}

fn above_roughness(
    name: &'static str,
    height: f64,
    displacement: f64,
    roughness: f64,
) -> Result<(), DomainError> {
    if height - displacement <= roughness {
        Err(DomainError::WithinRoughnessLayer {
            name,
            height,
            top: displacement + roughness,
        })
    } else {
        Ok(())
    }
}
