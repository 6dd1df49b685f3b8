#[macro_use]
pub(crate) mod ids;

pub(crate) mod data_structures;
pub(crate) mod error;
pub(crate) mod index;
pub(crate) mod parser;

pub use data_structures::{Map, Set};
