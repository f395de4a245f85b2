//! Top-level facade crate for svcconf.
//!
//! Re-exports the core types and the method-config table so users can depend on a single crate.

pub mod core {
    pub use svcconf_core::*;
}

pub mod table {
    pub use svcconf_table::*;
}
