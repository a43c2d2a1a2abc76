mod loader;
mod types;

pub use loader::{CONFIG_FILE, load, load_or_default};
pub use types::{Config, DEFAULT_TIMEOUT_SECS};
