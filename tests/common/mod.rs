//! Common test utilities for errpage CLI tests.
//!
//! `TestEnv` owns a temp directory used as both the working directory and
//! the config/home root, so the host's config and locale never leak in.

#![allow(dead_code)]

pub mod env;

pub use env::*;
