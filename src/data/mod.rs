//! Contingency table data structures

mod table;

pub use table::ContingencyTable;
