use nalgebra::{Matrix4, Vector3, Vector4};
use std::path::PathBuf;

pub type Float = f32;

pub type Vector3f = Vector3<Float>;
pub type Vector4f = Vector4<Float>;
pub type Matrix4f = Matrix4<Float>;

pub const DEFAULT_LOG_FILE: &str = "dotscene.log";

#[derive(Default, Clone, Debug)]
pub struct Options {
    pub cat      : bool,
    pub verbose  : bool,
    pub log_file : PathBuf
}

impl Options {
    pub fn new() -> Self {
        Self {
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            ..Default::default()
        }
    }
}
