use clap::ValueEnum;

use crate::util::hash::CHUNK_SIZE;

/// Where the finished digest goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Write the digest to standard output
    #[default]
    Print,
    /// Write the digest to `<path>.sha256`
    Sidecar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    chunk_size: usize,
    pub output: OutputMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
            output: OutputMode::Print,
        }
    }
}

impl Config {
    pub fn new(output: OutputMode) -> Self {
        Self {
            output,
            ..Self::default()
        }
    }

    /// Any positive chunk size yields the same digest; only throughput differs.
    #[cfg(test)]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> anyhow::Result<Self> {
        if chunk_size == 0 {
            anyhow::bail!("chunk size must be positive");
        }
        self.chunk_size = chunk_size;
        Ok(self)
    }

    pub fn get_chunk_size(&self) -> usize {
        self.chunk_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.get_chunk_size(), 65536);
        assert_eq!(config.output, OutputMode::Print);
    }

    #[test]
    fn new_keeps_default_chunk_size() {
        let config = Config::new(OutputMode::Sidecar);
        assert_eq!(config.get_chunk_size(), CHUNK_SIZE);
        assert_eq!(config.output, OutputMode::Sidecar);
    }

    #[test]
    fn chunk_size_override() {
        let config = Config::default().with_chunk_size(512).unwrap();
        assert_eq!(config.get_chunk_size(), 512);
        assert!(Config::default().with_chunk_size(0).is_err());
    }
}
