//! Domain services.

mod cache_policy;

pub use cache_policy::MovieCachePolicy;
