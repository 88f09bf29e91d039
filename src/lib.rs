//! All primes up to an inclusive bound, via an odd-only sieve of Eratosthenes.
//!
//!     assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29], odd_sieve::primes_up_to(30));

// Internal modules
mod sieve;

pub use sieve::OddSieve;

/// All primes p with 2 <= p <= bound, in ascending order.
///
/// Total over isize: bounds below 2 (including negative ones) give an empty Vec.
pub fn primes_up_to(bound: isize) -> Vec<usize> {
    OddSieve::primes_up_to(bound)
}
