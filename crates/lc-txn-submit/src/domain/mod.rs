//! # Domain Module
//!
//! Pure submission logic: identifiers, headers, proposal construction and
//! transaction assembly. Nothing here performs I/O.

pub mod assembly;
pub mod entities;
pub mod errors;
pub mod header;
pub mod invariants;
pub mod proposal;
pub mod value_objects;

pub use assembly::create_transaction;
pub use entities::*;
pub use errors::*;
pub use header::*;
pub use invariants::*;
pub use proposal::*;
pub use value_objects::*;
