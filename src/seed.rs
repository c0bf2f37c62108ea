/// Wall-clock seeding for callers that want the "seconds since epoch"
/// default. The clock is read once per constructed generator; reproducible
/// runs should seed explicitly instead.
use std::time::{SystemTime, UNIX_EPOCH};

use crate::simple::lcg::Lcg;
use crate::simple::mwc::Mwc;
use crate::simple::xorshift::Xorshift64;

/// Seconds since the Unix epoch, truncated to 32 bits
///
/// Returns 0 if the system clock is set before the epoch
pub fn time_seed() -> u32 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs() as u32,
        Err(_) => 0,
    }
}

/// Seconds since the Unix epoch
///
/// Returns 0 if the system clock is set before the epoch
pub fn time_seed_u64() -> u64 {
    match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(n) => n.as_secs(),
        Err(_) => 0,
    }
}

impl Lcg {
    /// Create an LCG seeded from the current system time
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }
}

impl Mwc {
    /// Create an MWC generator seeded from the current system time, with the
    /// default carry
    pub fn from_time() -> Self {
        Self::new(time_seed())
    }
}

impl Xorshift64 {
    /// Create an xorshift generator seeded from the current system time
    pub fn from_time() -> Self {
        Self::new(time_seed_u64())
    }
}
