pub mod city_directory;

pub use city_directory::{CityDirectory, StateLocator};
