// Each test binary only uses part of the shared fakes.
#![allow(dead_code)]

pub mod test_utils;
