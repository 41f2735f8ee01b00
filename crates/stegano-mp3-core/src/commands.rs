//! Path based entry points, one per command line operation.

mod hide;
mod inspect;
mod unveil;
mod unveil_raw;

pub use hide::hide;
pub use inspect::inspect;
pub use unveil::unveil;
pub use unveil_raw::unveil_raw;
