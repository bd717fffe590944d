// tests/common/mod.rs

#![allow(unused_imports)]

pub use toolbelt_test_utils::{init_tracing, with_timeout};
