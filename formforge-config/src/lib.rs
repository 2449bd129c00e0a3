//! Formforge configuration management using Figment
//!
//! Sources, lowest precedence first:
//!
//! - built-in defaults
//! - `formforge.{toml,yaml,yml,json}` in the working directory, or a file
//!   named explicitly with [`ConfigProvider::with_file`]
//! - `FORMFORGE_*` environment variables, with `__` between nested keys
//!   (`FORMFORGE_DRAG__PREVIEW_POLICY=buffered`)
//!
//! ```toml
//! log_level = "info"
//!
//! [drag]
//! preview_policy = "buffered"
//! activation_delay_ms = 0
//! activation_tolerance_px = 5.0
//!
//! [export]
//! pretty = true
//! ```

mod discovery;
mod error;
mod provider;
mod types;

pub use discovery::{discover, ConfigFile, ConfigFormat, CONFIG_FILE_STEM};
pub use error::{ConfigError, ConfigResult};
pub use provider::{load_config, ConfigProvider, ENV_PREFIX};
pub use types::{BuilderConfig, DragSettings, ExportSettings};
