#![cfg(feature = "cli")]

pub mod describe;
pub mod evaluate;
pub mod outcomes;
