use crate::model::{finite, positive, DomainError};

/// Latent heat of vaporization (MJ kg-1) at temperature `t` (°C).
pub fn latent_heat(t: f64) -> Result<f64, DomainError> {
    let lambda = 2.501 - 0.002361 * finite("temperature", t)?;
    if lambda <= 0. {
        return Err(DomainError::NonPositive("latent heat of vaporization", lambda));
    }
    Ok(lambda)
}

/// Mean air density at constant pressure (kg m-3) from pressure `pres`
/// (kPa) and temperature `t` (°C).
pub fn air_density(pres: f64, t: f64) -> Result<f64, DomainError> {
    let pres = positive("atmospheric pressure", pres)?;
    if finite("temperature", t)? <= -273. {
        return Err(DomainError::AbsoluteZero(t));
    }
    Ok(pres / ((1.01 * (t + 273.)) * 0.287))
}

/// Pressure (kPa) and air temperature at 2 m (°C).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState {
    pub pressure: f64,
    pub temperature: f64,
}

impl AirState {
    pub fn latent_heat(&self) -> Result<f64, DomainError> {
        latent_heat(self.temperature)
    }

    pub fn density(&self) -> Result<f64, DomainError> {
        air_density(self.pressure, self.temperature)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn latent_heat_at_twenty_degrees() {
        assert_relative_eq!(latent_heat(20.0).unwrap(), 2.45378, max_relative = 1e-12);
        assert_relative_eq!(latent_heat(0.0).unwrap(), 2.501);
    }

    #[test]
    fn latent_heat_decreases_with_temperature() {
        let temps = [-30.0, 0.0, 15.0, 40.0];
        let values: Vec<f64> = temps.iter().map(|&t| latent_heat(t).unwrap()).collect();
        assert!(values.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn latent_heat_vanishes_above_thousand_degrees() {
        assert!(latent_heat(1000.0).is_ok());
        assert!(matches!(
            latent_heat(1060.0),
            Err(DomainError::NonPositive("latent heat of vaporization", _))
        ));
        assert!(latent_heat(f64::NAN).is_err());
    }

    #[test]
    fn standard_atmosphere_density() {
        let rho = air_density(101.3, 20.0).unwrap();
        assert_relative_eq!(rho, 101.3 / (1.01 * 293. * 0.287), max_relative = 1e-12);
        assert_relative_eq!(rho, 1.192720144878409, max_relative = 1e-9);
    }

    #[test]
    fn density_rejects_absolute_zero_and_vacuum() {
        assert_eq!(air_density(101.3, -273.0), Err(DomainError::AbsoluteZero(-273.0)));
        assert!(air_density(101.3, -300.0).is_err());
        assert_eq!(
            air_density(0.0, 20.0),
            Err(DomainError::NonPositive("atmospheric pressure", 0.0))
        );
    }

    #[test]
    fn air_state_delegates() {
        let air = AirState {
            pressure: 95.0,
            temperature: 12.5,
        };
        assert_eq!(air.latent_heat(), latent_heat(12.5));
        assert_eq!(air.density(), air_density(95.0, 12.5));
    }
}
