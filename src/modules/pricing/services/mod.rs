pub mod on_road_service;
pub mod price_composer;

pub use on_road_service::OnRoadPriceService;
pub use price_composer::PriceComposer;
