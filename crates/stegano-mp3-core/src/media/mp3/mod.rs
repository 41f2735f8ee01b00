mod codec;
mod header;
mod lsb_codec;
mod permutation;
mod scanner;
pub mod sequencer;
mod side_info;

pub use codec::*;
pub use header::*;
pub use lsb_codec::*;
pub use permutation::Permutation;
pub use scanner::*;
pub use side_info::SideInfo;
