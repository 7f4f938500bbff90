//! Suite fetch: keep an extracted copy of the suite archives current.
//!
//! Freshness is purely timestamp based: the destination is current when it
//! exists and none of the source archives has a newer modification time.
//! Nothing is persisted besides the extracted tree itself.

use std::fs::{self, File};
use std::path::Path;

use tar::Archive;

use crate::error::GateError;
use crate::resolver::{modified_time, ArtifactResolver};

/// What [`fetch_test_suite`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Destination was current; nothing was touched.
    UpToDate,
    /// Destination was (re)created and every archive extracted.
    Extracted,
}

/// Whether `dest` must be re-extracted from `artifacts`.
///
/// Stops at the first artifact newer than the destination.
pub fn needs_refresh(
    dest: &Path,
    artifacts: &[String],
    resolver: &dyn ArtifactResolver,
) -> Result<bool, GateError> {
    if !dest.exists() {
        tracing::debug!("{} does not exist and needs to be extracted", dest.display());
        return Ok(true);
    }

    let dest_modified = modified_time(dest)?;
    for name in artifacts {
        if resolver.modified(name)? > dest_modified {
            tracing::debug!("{} needs to be extracted", name);
            return Ok(true);
        }
    }
    Ok(false)
}

/// Ensure `dest` holds the current contents of `artifacts`.
///
/// A stale destination is deleted, recreated empty and every archive is
/// unpacked into it in order; later archives overwrite earlier entries.
/// A failure part-way leaves the partially extracted tree behind.
pub fn fetch_test_suite(
    dest: &Path,
    artifacts: &[String],
    resolver: &dyn ArtifactResolver,
) -> Result<FetchOutcome, GateError> {
    if !needs_refresh(dest, artifacts, resolver)? {
        return Ok(FetchOutcome::UpToDate);
    }

    if dest.exists() {
        tracing::debug!("Deleting the old test directory {}", dest.display());
        fs::remove_dir_all(dest)
            .map_err(|e| GateError::io("Failed to delete test directory", dest, e))?;
    }
    fs::create_dir_all(dest).map_err(|e| GateError::io("Failed to create test directory", dest, e))?;

    for name in artifacts {
        let archive = resolver.resolve(name)?;
        tracing::info!("Extracting {} into {}", archive.display(), dest.display());
        extract_archive(&archive, dest)?;
    }
    Ok(FetchOutcome::Extracted)
}

/// Unpack a tar archive into `dest`.
pub fn extract_archive(archive: &Path, dest: &Path) -> Result<(), GateError> {
    let extract_err = |source| GateError::Extract {
        archive: archive.to_path_buf(),
        source,
    };
    let file = File::open(archive).map_err(extract_err)?;
    Archive::new(file).unpack(dest).map_err(extract_err)
}
