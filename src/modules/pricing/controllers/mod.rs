pub mod price_controller;

pub use price_controller::configure;
