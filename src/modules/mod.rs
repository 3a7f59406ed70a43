pub mod health;
pub mod locations;
pub mod pricing;
pub mod rto;
pub mod variants;
