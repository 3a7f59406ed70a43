pub mod assessment;
pub mod fuel_type;
pub mod jurisdiction;

pub use assessment::{Assessment, Levy, LevyKind, TaxResult, VehicleProfile};
pub use fuel_type::FuelType;
pub use jurisdiction::Jurisdiction;
