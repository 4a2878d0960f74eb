//! JSON persistence of [`ModelSnapshot`]s.

use std::path::Path;

use crate::model::{Model, ModelSnapshot};

/// Saves the state of a model to a JSON file.
///
/// The file is written next to its destination and renamed into place, so
/// an interrupted save never leaves a truncated file behind.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn save_snapshot(model: &dyn Model, path: impl AsRef<Path>) -> std::io::Result<()> {
    let path = path.as_ref();
    let snapshot = model.snapshot();

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));
    let file = std::fs::File::create(&tmp_path)?;
    serde_json::to_writer_pretty(file, &snapshot).map_err(std::io::Error::other)?;
    std::fs::rename(&tmp_path, path)?;
    trace_info!(model = snapshot.model.as_str(), path = %path.display(), "snapshot saved");
    Ok(())
}

/// Loads a snapshot from a JSON file.
///
/// Restore it with [`Model::restore`] or [`from_snapshot`](crate::model::from_snapshot).
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or parsed.
pub fn load_snapshot(path: impl AsRef<Path>) -> std::io::Result<ModelSnapshot> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(file)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}
