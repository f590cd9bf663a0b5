//! # Numera
//!
//! A small arithmetic and number-theory helper library with a demonstration
//! CLI that prints a fixed transcript to standard output.
//!
//! ## Usage
//!
//! ```bash
//! numera                # print the full demonstration transcript
//! numera divide 15 3    # run a single operation
//! ```
//!
//! ## Modules
//!
//! - `math` - Pure arithmetic and number-theory operations
//! - `demo` - Demonstration driver producing the fixed transcript
//! - `error` - Typed errors for the fallible operations

pub mod demo;
pub mod error;
pub mod math;

pub use error::{MathError, Result};
