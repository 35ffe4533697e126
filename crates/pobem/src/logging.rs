//! Tracing targets for the BEM transform.
//!
//! pobem instruments with the `tracing` crate and never installs a
//! subscriber. To see its output, install one in the host application and
//! filter on the targets below:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("pobem::rewrite=trace")
//!     .init();
//! ```

/// Target names for log filtering.
pub mod targets {
    /// Selector rewriting.
    pub const REWRITE: &str = "pobem::rewrite";
    /// At-rule normalization.
    pub const NORMALIZE: &str = "pobem::normalize";
    /// Delimiter configuration.
    pub const CONFIG: &str = "pobem::config";
    /// Whole-stylesheet transform runs.
    pub const TRANSFORM: &str = "pobem::transform";
}
