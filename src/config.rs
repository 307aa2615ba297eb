use flate2::Compression;

// Deflate compression level, a mid-range value trading ratio for speed
const DEFAULT_COMPRESSION_LEVEL: u32 = 3;

#[derive(Debug, Clone)]
pub struct DeflateConfig {
    pub level: Compression,
}

impl Default for DeflateConfig {
    fn default() -> Self {
        DeflateConfig {
            level: Compression::new(DEFAULT_COMPRESSION_LEVEL),
        }
    }
}
