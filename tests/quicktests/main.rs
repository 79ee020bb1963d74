//! Property tests that only use the public API.

mod tree;
