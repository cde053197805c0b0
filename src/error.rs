use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("header heights must satisfy 0 < min < mid < max, got min={min} mid={mid} max={max}")]
    HeightsOutOfOrder { min: f32, mid: f32, max: f32 },
    #[error("device pixel ratio must be finite and positive, got {0}")]
    InvalidPixelRatio(f32),
    #[error("invalid spring: mass={mass} stiffness={stiffness} damping={damping}")]
    InvalidSpring {
        mass: f32,
        stiffness: f32,
        damping: f32,
    },
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, Error>;
