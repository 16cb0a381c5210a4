//! Foil position lookup.
//!
//! Maps interchangeable filter-foil names to their step positions on the
//! stage. The interactive selection front end lives outside the library;
//! this module only provides the table it consults.

mod table;

pub use table::FoilTable;
