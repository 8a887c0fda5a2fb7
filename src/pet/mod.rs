pub mod penman_monteith;

pub use penman_monteith::{
    crop_evapotranspiration, penman_monteith, PenmanMonteith, RadiationBalance,
    Weather,
};
