#![no_std]

extern crate alloc;

pub mod alphabet;
pub mod analysis;
pub mod cipher;
pub mod coincidence;
pub mod language;

#[cfg(test)]
mod tests {}
