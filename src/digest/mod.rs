use std::{
    ffi::OsString,
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;

use crate::{
    config::{Config, OutputMode},
    util,
};

pub const SIDECAR_EXTENSION: &str = ".sha256";

#[derive(Debug, Default)]
pub struct FileDigester {
    config: Config,
}

impl FileDigester {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// SHA-256 of the full contents of `path` as 64 lowercase hex characters.
    pub fn digest(&self, path: &Path) -> anyhow::Result<String> {
        util::hash::calculate_file_hash(path, self.config.get_chunk_size())
    }

    /// Digests `path` and emits the result according to the configured output mode.
    pub fn run(&self, path: &Path) -> anyhow::Result<()> {
        let hex = self.digest(path)?;
        match self.config.output {
            OutputMode::Print => {
                let mut stdout = io::stdout().lock();
                Self::write_digest(&mut stdout, &hex).context("failed to write to stdout")
            }
            OutputMode::Sidecar => Self::write_sidecar(path, &hex).map(|_| ()),
        }
    }

    fn write_digest<W: Write>(out: &mut W, hex: &str) -> io::Result<()> {
        out.write_all(hex.as_bytes())?;
        out.flush()
    }

    /// Creates or truncates the sidecar for `path` and writes `hex` into it.
    pub fn write_sidecar(path: &Path, hex: &str) -> anyhow::Result<PathBuf> {
        let sidecar = sidecar_path(path);
        Self::store_sidecar(&sidecar, hex, |p| File::create(p))?;

        tracing::debug!(path = %sidecar.display(), "sidecar written");
        Ok(sidecar)
    }

    /// A sidecar that could not be opened is left untouched; only one this
    /// call created and then failed to fill is removed.
    fn store_sidecar<W, F>(sidecar: &Path, hex: &str, create: F) -> anyhow::Result<()>
    where
        W: Write,
        F: FnOnce(&Path) -> io::Result<W>,
    {
        let mut file =
            create(sidecar).with_context(|| format!("failed to create {}", sidecar.display()))?;

        if let Err(e) = Self::write_digest(&mut file, hex) {
            drop(file);
            if let Err(remove_err) = fs::remove_file(sidecar) {
                tracing::warn!(
                    path = %sidecar.display(),
                    error = %remove_err,
                    "could not remove partial sidecar"
                );
            }
            return Err(e).with_context(|| format!("failed to write {}", sidecar.display()));
        }
        Ok(())
    }
}

/// `foo.txt` -> `foo.txt.sha256`
pub fn sidecar_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(SIDECAR_EXTENSION);
    PathBuf::from(name)
}
