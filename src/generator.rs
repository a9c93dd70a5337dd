//! End-to-end schedule candidate generation.
//!
//! Drives the sampling and conflict layers: draws distinct random
//! candidate combinations from the per-course section lists, then keeps
//! the conflict-free ones. Callers resolve course filters into section
//! lists beforehand (that query runs in the persistence layer) and own
//! the randomness source, so concurrent requests stay independent and
//! tests can seed for reproducible output.

use rand::Rng;

use crate::conflict::candidate_is_valid;
use crate::models::{Section, UnavailableBlock};
use crate::sampling::{sample, SamplingError};

/// Generates conflict-free schedule candidates.
///
/// Samples up to `limit` distinct combinations of one section per list
/// and returns those whose meetings are mutually compatible and clear of
/// every unavailable block. Order follows the random draw. An empty
/// result is normal: no lists, an empty list, a zero limit, or every
/// drawn combination clashing all produce one.
///
/// Fails only if the combination count overflows `usize`.
pub fn generate_schedules<'a, R>(
    lists: &'a [Vec<Section>],
    unavailable: &[UnavailableBlock],
    limit: usize,
    rng: &mut R,
) -> Result<Vec<Vec<&'a Section>>, SamplingError>
where
    R: Rng + ?Sized,
{
    let candidates = sample(lists, limit, rng)?;
    log::debug!(
        "drawing {} of {} possible combinations across {} courses",
        candidates.len(),
        candidates.space_size(),
        lists.len()
    );

    let schedules: Vec<Vec<&Section>> = candidates
        .filter(|candidate| candidate_is_valid(candidate, unavailable))
        .collect();
    log::debug!("{} combinations are conflict-free", schedules.len());

    Ok(schedules)
}
