//! Utility functions shared by the library and the binary

pub mod logging;
