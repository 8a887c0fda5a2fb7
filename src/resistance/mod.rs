pub mod aerodynamic;
pub mod surface;

pub use aerodynamic::aerodynamic_resistance;
pub use surface::surface_resistance;
