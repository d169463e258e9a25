pub mod catalog;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::cli::LocalStorage;

pub use catalog::{IndoorMapCatalog, DEFAULT_ALLOW_LIST};
pub use config::toml_config::TypegenConfig;
pub use core::generator::{GenerationReport, Generator};
pub use core::runner::execute;
pub use domain::ports::ModelCatalog;
pub use utils::error::{Result, TypegenError};

/// Writes declarations for the default indoor-map allow-list to stdout.
pub fn to_tsx() -> Result<GenerationReport> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    generate_default(&mut out)
}

/// Writes declarations for the default indoor-map allow-list to `out`.
pub fn generate_default<W: std::io::Write>(out: &mut W) -> Result<GenerationReport> {
    let models = IndoorMapCatalog::new().resolve(DEFAULT_ALLOW_LIST)?;
    Generator::new(models).run(out)
}
