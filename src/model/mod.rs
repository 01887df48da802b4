//! Pure data structures held by the catalog.

pub mod book;
pub mod loan;

pub use book::*;
pub use loan::*;
