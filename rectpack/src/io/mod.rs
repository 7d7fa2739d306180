/// External representations of instances and solutions, (de)serializable with serde
pub mod ext_repr;

/// Converting external instances into validated internal ones
pub mod import;

/// Converting internal solutions into external representations
pub mod export;

/// Rendering floorplans as SVG documents
pub mod svg;

#[doc(inline)]
pub use export::export_solution;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::parse_instance;
