//! Shared imports used by every module.

pub use std::path::{Path, PathBuf};

pub use anyhow::{Context as _, Result, bail};
#[allow(unused_imports)]
pub use tracing::{debug, instrument, warn};
