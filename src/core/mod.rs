//! Core building blocks: scaling parameters, file naming rules and the resize
//! primitive. These are consumed by the high-level `api` module.
pub mod naming;
pub mod params;
pub mod processing;
