pub mod consolidation;
pub mod entry_builder;
pub mod importer;
pub mod progression;
pub mod rep_extractor;
pub mod rep_max;
pub mod set_details;
