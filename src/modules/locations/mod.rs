// City to state resolution for price pages

pub mod services;

pub use services::{CityDirectory, StateLocator};
