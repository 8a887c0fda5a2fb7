use crate::model::{finite, positive, DomainError};

/// Bulk surface resistance of the canopy (s m-1), rs = rl / LAIactive.
///
/// `rl` is the bulk stomatal resistance of the well-illuminated leaf
/// (about 100 s m-1 under well-watered conditions).
pub fn surface_resistance(lai_active: f64, rl: f64) -> Result<f64, DomainError> {
    let lai_active = positive("active leaf area index", lai_active)?;
    Ok(finite("stomatal resistance", rl)? / lai_active)
}
