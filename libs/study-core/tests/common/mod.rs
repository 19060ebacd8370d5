//! Shared fixtures for study-core integration tests.

#![allow(dead_code)]

pub mod fixtures;
