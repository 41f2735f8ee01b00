pub mod configuration;
pub mod mp3;
pub mod payload;
mod types;

use std::path::Path;

pub use configuration::{Configuration, ConfigurationBuilder, Key, LsbBits, MAX_KEY_CHARS};
pub use types::*;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> crate::Result<()>;
}
