mod capacity;
mod cipher;
mod envelope;

pub use capacity::*;
pub use cipher::*;
pub use envelope::*;
