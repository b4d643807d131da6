use std::{
    fs::File,
    io::{ErrorKind, Read},
    path::Path,
};

use anyhow::{bail, Context};
use sha2::{Digest, Sha256};

pub(crate) const CHUNK_SIZE: usize = 65536;

pub(crate) fn calculate_file_hash(path: &Path, chunk_size: usize) -> anyhow::Result<String> {
    let mut file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let metadata = file
        .metadata()
        .with_context(|| format!("failed to stat {}", path.display()))?;
    if metadata.is_dir() {
        bail!("{} is a directory", path.display());
    }
    tracing::debug!(path = %path.display(), size = metadata.len(), "opened input");

    hash_reader(&mut file, chunk_size).with_context(|| format!("failed to read {}", path.display()))
}

/// Absorbs `reader` into a SHA-256 state `chunk_size` bytes at a time and
/// returns the lowercase hex digest. `chunk_size` must be positive; `Config`
/// guarantees it.
pub(crate) fn hash_reader<R: Read>(reader: &mut R, chunk_size: usize) -> anyhow::Result<String> {
    let mut hasher = Sha256::new();
    let mut buffer = vec![0; chunk_size];
    let mut chunks = 0u64;
    let mut total = 0u64;

    loop {
        let bytes_read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        hasher.update(&buffer[..bytes_read]);
        chunks += 1;
        total += bytes_read as u64;
    }

    tracing::debug!(chunks, bytes = total, "finalizing digest");
    Ok(format!("{:x}", hasher.finalize()))
}
