pub mod bbs;
pub mod lcg;
pub mod mwc;
pub mod xorshift;
