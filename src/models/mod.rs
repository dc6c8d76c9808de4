pub mod appointment;
pub mod filters;
