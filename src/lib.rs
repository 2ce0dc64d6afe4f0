#![doc = include_str!("../README.md")]
#[cfg(test)]
mod api_conformance;
pub mod intset;
pub use intset::{symmetric_difference, union, IntSet, Iter};
