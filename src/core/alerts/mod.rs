// Alert summary module.
//
// Architecture:
// - model.rs: Records, icons, severities and the ordered collection
// - theme.rs: Severity -> color token lookup
// - source.rs: Data-provider seam and the fixed literal summary

pub mod model;
pub mod source;
pub mod theme;
