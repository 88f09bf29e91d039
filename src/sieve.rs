use log::{debug, trace};

/// Odd-only sieve of Eratosthenes to generate all primes up to and including a given bound
///
/// The naive sieve strikes every multiple of every prime from an array covering [0, bound]. But 2 is
/// the only even prime, so after emitting it separately we never need to look at an even number
/// again. Odd-only sieving saves three halvings at once:
/// - the array only stores odd numbers, with odd n at index n / 2,
/// - the outer loop only visits odd candidates 3, 5, 7, ...,
/// - striking p only visits odd multiples p * p, p * (p + 2), ..., which are 2 * p apart in value
///   and therefore exactly p apart in index.
///
/// The asymptotic cost is still O(n log log n), with a smaller constant.
///
/// Usage:
///
///     use odd_sieve::OddSieve;
///
///     assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19], OddSieve::primes_up_to(20));
///     assert_eq!(Vec::<usize>::new(), OddSieve::primes_up_to(-5));
pub struct OddSieve {
    /// Composite flags: sieve[n / 2] is true once odd n is known to be composite.
    sieve: Vec<bool>,
    limit: usize,
}

impl OddSieve {
    const FIRST_PRIME: usize = 2;
    const FIRST_ODD_PRIME: usize = 3;

    /// All primes p with 2 <= p <= bound, in ascending order. Empty whenever bound < 2.
    pub fn primes_up_to(bound: isize) -> Vec<usize> {
        if bound < OddSieve::FIRST_PRIME as isize {
            return Vec::new();
        }
        let limit = bound as usize;
        debug!("Sieving odd candidates up to {}", limit);

        let mut odd_sieve = OddSieve::new(limit);
        odd_sieve.sieve_odd();
        let primes = odd_sieve.primes();

        debug!("Found {} primes up to {}", primes.len(), limit);
        primes
    }

    /// Create an unsieved OddSieve covering the odd numbers in [0, limit].
    fn new(limit: usize) -> OddSieve {
        let sieve = vec![false; OddSieve::n_to_sieve(limit + 1)];
        OddSieve { sieve, limit }
    }

    /// Strike every odd prime p with p * p <= limit.
    ///
    /// Composites above sqrt(limit) always have a prime factor at or below it, so once these
    /// primes are struck every unflagged odd number in [3, limit] is prime.
    fn sieve_odd(&mut self) {
        let mut p = OddSieve::FIRST_ODD_PRIME;
        // Same as p * p <= limit, without overflowing for limit near usize::MAX.
        while p <= self.limit / p {
            if !self.is_composite(p) {
                trace!("Striking odd multiples of {}", p);
                self.strike_prime(p);
            }
            p += 2;
        }
    }

    /// Flag the odd multiples of p from p * p through limit. Smaller multiples p * q have a smaller
    /// odd factor q and were already struck by it.
    fn strike_prime(&mut self, p: usize) {
        for sieve_multiple in (OddSieve::n_to_sieve(p * p)..self.sieve.len()).step_by(p) {
            self.sieve[sieve_multiple] = true;
        }
    }

    fn is_composite(&self, n: usize) -> bool {
        self.sieve[OddSieve::n_to_sieve(n)]
    }

    /// Collect 2 followed by every unflagged odd number in [3, limit].
    fn primes(&self) -> Vec<usize> {
        let mut primes = vec![OddSieve::FIRST_PRIME];
        primes.extend(
            self.sieve
                .iter()
                .enumerate()
                .skip(OddSieve::n_to_sieve(OddSieve::FIRST_ODD_PRIME))
                .filter(|&(_, &composite)| !composite)
                .map(|(sieve_n, _)| OddSieve::sieve_to_n(sieve_n)),
        );
        primes
    }

    fn n_to_sieve(n: usize) -> usize {
        n / 2
    }
    fn sieve_to_n(sieve_n: usize) -> usize {
        2 * sieve_n + 1
    }
}
