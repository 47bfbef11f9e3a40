use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Rotation is non-finite or too far from unit length to decode.
    #[error("undecodable quaternion ({x}, {y}, {z}, {w})")]
    UndecodableQuaternion { x: f32, y: f32, z: f32, w: f32 },

    #[error("color buffer error: {0}")]
    ColorBuffer(String),

    #[error("worker error: {0}")]
    Worker(String),
}

pub type Result<T> = std::result::Result<T, Error>;
