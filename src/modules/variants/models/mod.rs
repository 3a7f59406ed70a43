pub mod vehicle_variant;

pub use vehicle_variant::{
    parse_engine_size, CmsAttribute, CmsVariantPayload, VehicleVariant, ENGINE_SIZE_ATTRIBUTE,
    FUEL_TYPE_ATTRIBUTE,
};
