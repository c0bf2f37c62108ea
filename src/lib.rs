#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod mersenne;
#[cfg(feature = "std")]
pub mod seed;
pub mod simple;
