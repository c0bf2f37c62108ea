/// Blum-Blum-Shub generator
///
/// xn+1 = xn² mod m, with m the product of two large primes, each ≡ 3 mod 4
///
/// Not cryptographically secure with these parameters: the modulus is far
/// too small, and seed selection is not hardened
// large prime congruent to 3 mod 4
pub const P: u64 = 492876847;

// large prime congruent to 3 mod 4
pub const Q: u64 = 715225739;

pub const MOD: u64 = P * Q;

// prime, coprime with the modulus
pub const DEFAULT_SEED: u64 = 920419823;

pub struct BlumBlumShub {
    state: u64,
}

impl Default for BlumBlumShub {
    fn default() -> Self {
        Self {
            state: DEFAULT_SEED,
        }
    }
}

impl BlumBlumShub {
    /// Create a BBS generator from a seed
    ///
    /// The seed must be coprime with `MOD` (keep it prime for simplicity).
    /// This is not verified: a shared factor degrades the sequence toward
    /// zero without any runtime failure
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Advance the state and return a value on the [0,1)-real-interval
    pub fn next(&mut self) -> f64 {
        self.state = (self.state as u128 * self.state as u128 % MOD as u128) as u64;

        self.state as f64 / MOD as f64
    }
}
