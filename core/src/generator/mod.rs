use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: &GameConfig, canvas: Canvas) -> Result<Board>;
}
