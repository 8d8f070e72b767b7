use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must have at least one column and one row")]
    InvalidSize,
    #[error("Board needs an even number of cells to pair colors")]
    OddCellCount,
    #[error("Color list does not match the number of cells")]
    ColorCountMismatch,
    #[error("Game duration must be positive")]
    InvalidDuration,
}

pub type Result<T> = core::result::Result<T, GameError>;
