use std::io::{Cursor, Write as _};

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::{
    config::{BatchRequest, RenderConfig},
    error::{PlacardError, PlacardResult},
    naming::{entry_name, single_file_name},
    raster::TextRenderer,
};

/// Outcome of rendering one batch item, collected before archive assembly
/// so a failed item never aborts the batch.
pub struct RasterResult {
    /// Trimmed source text, used to derive the entry name.
    pub source_text: String,
    /// 1-based index among surviving (non-blank) items.
    pub position: usize,
    pub outcome: Result<Vec<u8>, PlacardError>,
}

/// Single-mode artifact: one encoded PNG plus its derived file name.
#[derive(Debug)]
pub struct SingleExport {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Batch-mode artifact: ZIP container bytes plus the number of entries that
/// survived rendering. A zero-entry archive is a valid outcome; callers
/// decide whether it is worth delivering.
#[derive(Debug)]
pub struct PackagedArchive {
    pub bytes: Vec<u8>,
    pub entry_count: usize,
}

/// Render `config.text` once and derive the download file name.
///
/// Single mode has no partial-success concept; a render failure is
/// propagated as-is.
pub fn render_one(
    renderer: &mut dyn TextRenderer,
    config: &RenderConfig,
) -> PlacardResult<SingleExport> {
    config.validate()?;
    let bytes = renderer.render(&config.text, config)?;
    Ok(SingleExport {
        file_name: single_file_name(&config.text),
        bytes,
    })
}

/// Render every non-blank item of `request` in order and package the
/// successful renders into one ZIP archive.
///
/// A `RenderUnavailable` failure skips that item and the batch continues.
/// Duplicate trimmed texts collapse to a single entry; the later item's
/// bytes replace the earlier ones.
#[tracing::instrument(skip_all, fields(items = request.items.len()))]
pub fn render_batch(
    renderer: &mut dyn TextRenderer,
    request: &BatchRequest,
) -> PlacardResult<PackagedArchive> {
    request.config.validate()?;

    let mut results = Vec::new();
    let mut position = 0usize;
    for raw in &request.items {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        position += 1;

        let outcome = renderer.render(trimmed, &request.config);
        if let Err(err) = &outcome {
            tracing::warn!(item = trimmed, error = %err, "batch item failed to render; skipping");
        }
        results.push(RasterResult {
            source_text: trimmed.to_string(),
            position,
            outcome,
        });
    }

    assemble_archive(&results)
}

/// Fold successful results into ZIP bytes, preserving first-seen entry
/// order.
pub fn assemble_archive(results: &[RasterResult]) -> PlacardResult<PackagedArchive> {
    let mut entries: Vec<(String, &[u8])> = Vec::new();
    for result in results {
        let Ok(bytes) = &result.outcome else {
            continue;
        };
        let name = entry_name(&result.source_text, result.position);
        match entries.iter_mut().find(|(existing, _)| *existing == name) {
            // Last write wins for identical stems.
            Some(slot) => slot.1 = bytes.as_slice(),
            None => entries.push((name, bytes.as_slice())),
        }
    }

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, bytes) in &entries {
        let opts =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
        zip.start_file(name.as_str(), opts)
            .map_err(|e| PlacardError::archive(format!("add archive entry '{name}': {e}")))?;
        zip.write_all(bytes)
            .map_err(|e| PlacardError::archive(format!("write archive entry '{name}': {e}")))?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| PlacardError::archive(format!("finalize archive: {e}")))?;

    Ok(PackagedArchive {
        bytes: cursor.into_inner(),
        entry_count: entries.len(),
    })
}

/// Caller-side splitting of a raw multi-line block into batch items:
/// newline-delimited, trimmed, blanks dropped.
pub fn split_nonblank_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
