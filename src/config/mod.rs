//! Configuration and path management for rentcalc

pub mod paths;
pub mod settings;

pub use paths::RentPaths;
pub use settings::Settings;
