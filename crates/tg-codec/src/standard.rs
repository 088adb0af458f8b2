//! Reference codec backends for each algorithm family.

use crate::traits::CodecDelegate;
use brotli::enc::BrotliEncoderParams;
use std::io::{Read, Write};
use tg_core::{CompressionAlgorithm, Result, TgError};

/// Codec delegate backed by the standard registry codecs:
/// lz4 for the fast block family, gzip as the general-purpose baseline,
/// brotli for structured data, bzip2 for organic data, zstd as the robust
/// fallback. `Store` is the identity.
#[derive(Debug, Clone)]
pub struct StandardCodecs {
    pub gzip_level: u32,
    pub brotli_quality: i32,
    pub brotli_window: i32,
    pub bzip2_level: u32,
    pub zstd_level: i32,
}

impl StandardCodecs {
    pub fn new() -> Self {
        Self {
            gzip_level: 6,
            brotli_quality: 9,
            brotli_window: 24,
            bzip2_level: 6,
            zstd_level: 3,
        }
    }

    pub fn with_gzip_level(mut self, level: u32) -> Self {
        self.gzip_level = level;
        self
    }

    pub fn with_brotli_quality(mut self, quality: i32) -> Self {
        self.brotli_quality = quality;
        self
    }

    pub fn with_zstd_level(mut self, level: i32) -> Self {
        self.zstd_level = level;
        self
    }

    fn gzip_encode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut enc = flate2::write::GzEncoder::new(
            Vec::new(),
            flate2::Compression::new(self.gzip_level),
        );
        enc.write_all(data)?;
        enc.finish()
    }

    fn gzip_decode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        flate2::read::GzDecoder::new(data).read_to_end(&mut out)?;
        Ok(out)
    }

    fn brotli_encode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let params = BrotliEncoderParams {
            quality: self.brotli_quality,
            lgwin: self.brotli_window,
            ..Default::default()
        };
        let mut out = Vec::new();
        brotli::BrotliCompress(&mut &data[..], &mut out, &params)?;
        Ok(out)
    }

    fn brotli_decode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        brotli::BrotliDecompress(&mut &data[..], &mut out)?;
        Ok(out)
    }

    fn bzip2_encode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut enc = bzip2::write::BzEncoder::new(
            Vec::new(),
            bzip2::Compression::new(self.bzip2_level),
        );
        enc.write_all(data)?;
        enc.finish()
    }

    fn bzip2_decode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut out = Vec::new();
        bzip2::read::BzDecoder::new(data).read_to_end(&mut out)?;
        Ok(out)
    }
}

impl Default for StandardCodecs {
    fn default() -> Self {
        Self::new()
    }
}

impl CodecDelegate for StandardCodecs {
    fn encode(&self, algorithm: CompressionAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let out = match algorithm {
            CompressionAlgorithm::FastBlock => {
                return Ok(lz4_flex::compress_prepend_size(data));
            }
            CompressionAlgorithm::GeneralPurpose => self.gzip_encode(data),
            CompressionAlgorithm::Structured => self.brotli_encode(data),
            CompressionAlgorithm::Organic => self.bzip2_encode(data),
            CompressionAlgorithm::RobustAdaptive => {
                zstd::stream::encode_all(data, self.zstd_level)
            }
            CompressionAlgorithm::Store => return Ok(data.to_vec()),
        };
        out.map_err(|e| TgError::codec(algorithm, e))
    }

    fn decode(&self, algorithm: CompressionAlgorithm, data: &[u8]) -> Result<Vec<u8>> {
        let out = match algorithm {
            CompressionAlgorithm::FastBlock => {
                return lz4_flex::decompress_size_prepended(data)
                    .map_err(|e| TgError::codec(algorithm, e));
            }
            CompressionAlgorithm::GeneralPurpose => self.gzip_decode(data),
            CompressionAlgorithm::Structured => self.brotli_decode(data),
            CompressionAlgorithm::Organic => self.bzip2_decode(data),
            CompressionAlgorithm::RobustAdaptive => zstd::stream::decode_all(data),
            CompressionAlgorithm::Store => return Ok(data.to_vec()),
        };
        out.map_err(|e| TgError::codec(algorithm, e))
    }
}
