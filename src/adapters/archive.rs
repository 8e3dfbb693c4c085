use crate::utils::error::{FilterError, Result};
use std::fs::File;
use std::io;
use std::path::Path;
use zip::result::ZipError;
use zip::ZipArchive;

/// Extract the single file `member` from the zip at `archive_path` into `dest_path`.
///
/// Returns the number of bytes written. `dest_path` is created or truncated.
pub fn unpack_member(
    archive_path: impl AsRef<Path>,
    member: &str,
    dest_path: impl AsRef<Path>,
) -> Result<u64> {
    let archive_path = archive_path.as_ref();
    let dest_path = dest_path.as_ref();
    let archive_label = archive_path.display().to_string();

    let file = File::open(archive_path).map_err(|source| FilterError::FileNotFound {
        path: archive_label.clone(),
        source,
    })?;
    let mut archive = ZipArchive::new(file)?;
    tracing::debug!("{} holds {} entries", archive_label, archive.len());

    let mut entry = match archive.by_name(member) {
        Ok(entry) => entry,
        Err(ZipError::FileNotFound) => {
            return Err(FilterError::Archive {
                archive: archive_label,
                message: format!("no member named '{}'", member),
            })
        }
        Err(e) => return Err(e.into()),
    };

    if entry.is_dir() {
        return Err(FilterError::Archive {
            archive: archive_label,
            message: format!("'{}' is a directory", member),
        });
    }

    let dest_label = dest_path.display().to_string();
    let mut out = File::create(dest_path).map_err(|source| FilterError::Io {
        path: dest_label.clone(),
        source,
    })?;

    // 解壓失敗（CRC 不符等）也會以 io::Error 回報
    let written = io::copy(&mut entry, &mut out).map_err(|source| FilterError::Io {
        path: dest_label.clone(),
        source,
    })?;

    tracing::info!("📦 Extracted {} ({} bytes) to {}", member, written, dest_label);
    Ok(written)
}
