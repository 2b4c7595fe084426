//! Syntax highlighting as a pure function of the buffer text.
//!
//! [`highlight`] scans the input left to right with a single composite
//! token pattern and emits a gap-filling sequence of category spans. The
//! scan is total: any input, including malformed or partial source, yields
//! a covering span sequence, and identical input yields identical output.
//! Callers recompute over the whole buffer on every content change.

mod patterns;
mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::highlight;
