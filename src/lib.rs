// clippy
#![cfg_attr(
    feature = "cargo-clippy",
    allow(
        clippy::float_cmp
    )
)]

pub mod core;
pub mod sceneparser;
