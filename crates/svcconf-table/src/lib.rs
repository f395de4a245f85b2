//! svcconf method-config tables.
//!
//! Parses a service config document and compiles its `methodConfig` blocks
//! into an immutable lookup table from `/service/method` to a caller-chosen
//! policy value, with `/service/*` as the service-wide fallback.
//!
//! ```
//! use svcconf_table::ServiceConfig;
//!
//! let cfg = ServiceConfig::parse(r#"{
//!     "loadBalancingPolicy": "round_robin",
//!     "methodConfig": [{ "name": [{ "service": "Foo" }], "waitForReady": true }]
//! }"#)?;
//! assert_eq!(cfg.lb_policy_name(), Some("round_robin"));
//!
//! let table = cfg.method_params_table()?;
//! assert_eq!(table.get("/Foo/Bar").and_then(|p| p.wait_for_ready), Some(true));
//! # Ok::<(), svcconf_core::SvcConfError>(())
//! ```

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod config;
pub mod document;
pub mod params;
pub mod table;

pub use document::ServiceConfig;
pub use params::{MethodParams, MethodParamsFactory};
pub use table::{MethodConfigFactory, MethodConfigTable};
