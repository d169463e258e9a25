use crate::config::cli::LocalStorage;
use crate::config::toml_config::TypegenConfig;
use crate::core::generator::{GenerationReport, Generator};
use crate::domain::ports::{ModelCatalog, Storage};
use crate::utils::error::{Result, TypegenError};
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::Path;

/// Runs one generation pass as configured.
///
/// Dry runs write the extraction plan as JSON to `out` and return `None`. With an
/// output path the declarations go to that file, written only once every model has
/// rendered; without one they stream to `out`.
pub fn execute<C: ModelCatalog, W: Write>(
    catalog: &C,
    config: &TypegenConfig,
    dry_run: bool,
    out: &mut W,
) -> Result<Option<GenerationReport>> {
    config.validate()?;
    tracing::debug!("Config: {:?}", config);

    let generator = Generator::new(config.resolve_models(catalog)?);

    if dry_run {
        tracing::info!("🔍 DRY RUN MODE - No declarations will be written");
        serde_json::to_writer_pretty(&mut *out, &generator.plan())?;
        writeln!(out)?;
        return Ok(None);
    }

    let report = match config.output_path() {
        Some(path) => {
            // 整批成功後才寫檔，避免留下不完整的輸出
            let mut rendered = Vec::new();
            let report = generator.run(&mut rendered)?;

            let target = Path::new(path);
            let base = target
                .parent()
                .map(|p| p.to_string_lossy().into_owned())
                .unwrap_or_default();
            let file_name = target
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .ok_or_else(|| TypegenError::InvalidConfigValueError {
                    field: "output.path".to_string(),
                    value: path.to_string(),
                    reason: "Path has no file name".to_string(),
                })?;

            LocalStorage::new(base).write_file(&file_name, &rendered)?;
            tracing::info!("📁 Output saved to: {}", path);
            report
        }
        None => generator.run(out)?,
    };

    Ok(Some(report))
}
