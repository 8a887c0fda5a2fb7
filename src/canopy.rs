use tracing::debug;

use crate::config::{AerodynamicConfig, REFERENCE_CROP_HEIGHT};
use crate::model::{non_negative, DomainError};
use crate::resistance::{aerodynamic_resistance, surface_resistance};

/// Zero plane displacement height (m), d = 2/3 h.
pub fn displacement_height(h: f64) -> Result<f64, DomainError> {
    Ok(2. / 3. * non_negative("crop height", h)?)
}

/// Roughness length governing momentum transfer (m), zom = 0.123 h.
pub fn momentum_roughness(h: f64) -> Result<f64, DomainError> {
    Ok(0.123 * non_negative("crop height", h)?)
}

/// Roughness length governing transfer of heat and vapour (m),
/// zoh = 0.1 zom.
pub fn heat_roughness(zom: f64) -> Result<f64, DomainError> {
    Ok(0.1 * non_negative("momentum roughness length", zom)?)
}

/// Leaf area index of clipped grass, LAI = 24 h.
pub fn leaf_area_index(h: f64) -> Result<f64, DomainError> {
    Ok(24. * non_negative("crop height", h)?)
}

/// Active (sunlit) leaf area index, half of the total.
pub fn active_leaf_area_index(lai: f64) -> Result<f64, DomainError> {
    Ok(0.5 * non_negative("leaf area index", lai)?)
}

/// Canopy properties derived from crop height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropGeometry {
    pub height: f64,
    pub displacement: f64,
    pub momentum_roughness: f64,
    pub heat_roughness: f64,
    pub lai: f64,
    pub lai_active: f64,
}

impl CropGeometry {
    pub fn new(height: f64) -> Result<Self, DomainError> {
        let momentum_roughness = momentum_roughness(height)?;
        let lai = leaf_area_index(height)?;
        if height == 0. {
            debug!("zero crop height, canopy geometry is degenerate");
        }
        Ok(Self {
            height,
            displacement: displacement_height(height)?,
            momentum_roughness,
            heat_roughness: heat_roughness(momentum_roughness)?,
            lai,
            lai_active: active_leaf_area_index(lai)?,
        })
    }

    pub fn aerodynamic_resistance(
        &self,
        wind_speed: f64,
        config: &AerodynamicConfig,
    ) -> Result<f64, DomainError> {
        aerodynamic_resistance(
            self.displacement,
            self.momentum_roughness,
            self.heat_roughness,
            wind_speed,
            config,
        )
    }

    pub fn surface_resistance(
        &self,
        stomatal_resistance: f64,
    ) -> Result<f64, DomainError> {
        surface_resistance(self.lai_active, stomatal_resistance)
    }
}

impl Default for CropGeometry {
    fn default() -> Self {
        let h = REFERENCE_CROP_HEIGHT;
        let zom = 0.123 * h;
        Self {
            height: h,
            displacement: 2. / 3. * h,
            momentum_roughness: zom,
            heat_roughness: 0.1 * zom,
            lai: 24. * h,
            lai_active: 0.5 * (24. * h),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn proportional_transforms() {
        for h in [0.0, 0.05, 0.12, 0.5, 1.0, 2.5] {
            let zom = momentum_roughness(h).unwrap();
            assert_eq!(zom, 0.123 * h);
            assert_eq!(heat_roughness(zom).unwrap(), 0.1 * zom);
            assert_eq!(displacement_height(h).unwrap(), 2. / 3. * h);
            let lai = leaf_area_index(h).unwrap();
            assert_eq!(lai, 24. * h);
            assert_eq!(active_leaf_area_index(lai).unwrap(), 0.5 * lai);
        }
    }

    #[test]
    fn zero_height_is_all_zero() {
        let geometry = CropGeometry::new(0.0).unwrap();
        assert_eq!(geometry.displacement, 0.0);
        assert_eq!(geometry.momentum_roughness, 0.0);
        assert_eq!(geometry.heat_roughness, 0.0);
        assert_eq!(geometry.lai, 0.0);
        assert_eq!(geometry.lai_active, 0.0);
    }

    #[test]
    fn negative_height_is_rejected() {
        assert_eq!(
            CropGeometry::new(-0.1),
            Err(DomainError::Negative("crop height", -0.1))
        );
        assert!(heat_roughness(-1e-3).is_err());
        assert!(active_leaf_area_index(-2.0).is_err());
        assert!(leaf_area_index(f64::NAN).is_err());
    }

    #[test]
    fn default_is_reference_grass() {
        let geometry = CropGeometry::default();
        let derived = CropGeometry::new(0.12).unwrap();
        assert_relative_eq!(geometry.displacement, derived.displacement);
        assert_relative_eq!(geometry.momentum_roughness, 0.01476);
        assert_relative_eq!(geometry.heat_roughness, 0.001476);
        assert_relative_eq!(geometry.lai, 2.88);
        assert_relative_eq!(geometry.lai_active, 1.44);
        assert_eq!(geometry, derived);
    }

    #[test]
    fn zero_height_has_no_surface_resistance() {
        let geometry = CropGeometry::new(0.0).unwrap();
        assert!(geometry.surface_resistance(100.0).is_err());
        assert!(geometry
            .aerodynamic_resistance(2.0, &AerodynamicConfig::default())
            .is_err());
    }
}
