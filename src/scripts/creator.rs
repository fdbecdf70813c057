use std::path::PathBuf;

use super::template::render_for;
use super::{ScriptError, ScriptLayout, ScriptRequest, ScriptStore};

/// Validate, render, write and chmod the scripts for `request`.
///
/// Nothing touches the filesystem until validation and rendering succeed.
/// A failure part way leaves earlier files in place.
pub fn create_scripts(
    store: &ScriptStore,
    layout: ScriptLayout,
    request: &ScriptRequest,
) -> Result<Vec<PathBuf>, ScriptError> {
    request.validate()?;

    let rendered = layout
        .kinds()
        .iter()
        .map(|kind| -> Result<(String, String), ScriptError> {
            Ok((kind.file_name(&request.name), render_for(*kind, request)?))
        })
        .collect::<Result<Vec<_>, _>>()?;

    store.ensure_dir()?;

    let mut paths = Vec::with_capacity(rendered.len());
    for (file_name, content) in &rendered {
        paths.push(store.write_script(file_name, content)?);
    }

    for path in &paths {
        store.make_executable(path)?;
    }

    tracing::info!(
        "Created {} script(s) for {} in {:?}",
        paths.len(),
        request.name,
        store.dir()
    );
    Ok(paths)
}
