//! Mixed-radix index mapping over a cartesian product.
//!
//! Treats an integer in `[0, N)` as a mixed-radix number whose digit at
//! position `j` has radix `len(list j)`, most significant first in input
//! order. Decoding an index yields one choice per list without ever
//! enumerating the N-sized space.
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.1
//! (mixed-radix number systems)

use thiserror::Error;

/// Error raised while setting up or running a sampling request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SamplingError {
    /// The product of the candidate list lengths does not fit in `usize`.
    ///
    /// Silent wrapping would corrupt the uniform-sampling guarantee, so
    /// the condition is surfaced instead.
    #[error("product of {num_lists} candidate list lengths overflows usize")]
    ProductOverflow {
        /// Number of candidate lists in the failed product.
        num_lists: usize,
    },
}

/// The implicit set of all ways to choose one element from each of
/// several candidate lists, addressed by integer index.
///
/// Construction precomputes, for each position, the product of the list
/// lengths to its right; decoding an index is then one division and one
/// modulo per position. With no lists, or any zero-length list, the
/// space is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSpace {
    lengths: Vec<usize>,
    divisors: Vec<usize>,
    size: usize,
}

impl ProductSpace {
    /// Builds the space for candidate lists of the given lengths.
    ///
    /// Fails if the total product overflows `usize`.
    pub fn new(lengths: &[usize]) -> Result<Self, SamplingError> {
        let size = if lengths.is_empty() {
            0
        } else {
            lengths
                .iter()
                .try_fold(1usize, |product, &len| product.checked_mul(len))
                .ok_or(SamplingError::ProductOverflow {
                    num_lists: lengths.len(),
                })?
        };

        // Suffix products; skipped for an empty space where no index is
        // ever decoded. For size > 0 every suffix product is <= size, so
        // the multiplications cannot overflow.
        let mut divisors = vec![1; lengths.len()];
        if size > 0 {
            let mut suffix_product = 1;
            for (j, &len) in lengths.iter().enumerate().rev() {
                divisors[j] = suffix_product;
                suffix_product *= len;
            }
        }

        Ok(Self {
            lengths: lengths.to_vec(),
            divisors,
            size,
        })
    }

    /// Number of distinct tuples in the space.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the space contains no tuples.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of candidate lists (tuple arity).
    pub fn arity(&self) -> usize {
        self.lengths.len()
    }

    /// Decodes an index into one choice per list, in input order.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn decode(&self, index: usize) -> Vec<usize> {
        assert!(
            index < self.size,
            "product index {index} out of range 0..{}",
            self.size
        );
        self.divisors
            .iter()
            .zip(&self.lengths)
            .map(|(&divisor, &len)| (index / divisor) % len)
            .collect()
    }

    /// Encodes per-list choices back into the unique product index.
    ///
    /// Inverse of [`decode`](Self::decode).
    ///
    /// # Panics
    /// Panics if the arity or any choice is out of range.
    pub fn encode(&self, choices: &[usize]) -> usize {
        assert_eq!(
            choices.len(),
            self.lengths.len(),
            "choice tuple arity mismatch"
        );
        choices
            .iter()
            .zip(self.divisors.iter().zip(&self.lengths))
            .map(|(&choice, (&divisor, &len))| {
                assert!(choice < len, "choice {choice} out of range 0..{len}");
                choice * divisor
            })
            .sum()
    }
}
