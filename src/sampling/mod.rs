//! Random distinct sampling from an implicit cartesian product.
//!
//! The combination space of per-course section choices is far too large
//! to enumerate (its size is the product of the per-course candidate
//! counts), so candidates are addressed by integer index instead:
//!
//! - [`ProductSpace`] maps an index in `[0, N)` to the unique tuple of
//!   per-list choices it denotes, via mixed-radix decomposition.
//! - [`sample`] draws a uniform random subset of distinct indices and
//!   decodes them lazily into candidate tuples.
//!
//! Sampling cost is proportional to the number of candidates drawn, never
//! to the size of the product space.

mod product;
mod sampler;

pub use product::{ProductSpace, SamplingError};
pub use sampler::{DEFAULT_SCHEDULE_LIMIT, sample, ScheduleCandidates};
