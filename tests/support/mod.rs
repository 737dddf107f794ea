#![allow(dead_code)]

pub mod architecture;
pub mod brute;
pub mod fixtures;
