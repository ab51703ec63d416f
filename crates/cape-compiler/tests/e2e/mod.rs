//! End-to-end tests for the cape translator
//!
//! These tests lower IR forests through the compiler facade and check the
//! generated Python source, or the error that stopped lowering.

mod harness;
mod literals;
mod operators;
mod conditionals;
mod loops;
mod calls;
mod unsupported;

pub use harness::*;
