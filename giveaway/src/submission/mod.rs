pub mod errors;

pub mod model;
pub mod validation;
pub mod gateway;
pub mod workflow;
