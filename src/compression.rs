//! Functionality to compress and decompress data according to the parquet specification
pub use super::parquet_bridge::Compression;

use crate::error::{Error, Result};

fn inactive(compression: Compression) -> Error {
    Error::UnsupportedCodec(format!(
        "{:?} requires a crate feature that is not active",
        compression
    ))
}

/// Compresses data stored in slice `input_buf` and appends the compressed result
/// to `output_buf`.
/// Note that you'll need to call `clear()` before reusing the same `output_buf`
/// across different `compress` calls.
pub fn compress(
    compression: Compression,
    input_buf: &[u8],
    output_buf: &mut Vec<u8>,
) -> Result<()> {
    match compression {
        Compression::Uncompressed => {
            output_buf.extend_from_slice(input_buf);
            Ok(())
        }
        #[cfg(feature = "brotli")]
        Compression::Brotli => {
            use std::io::Write;
            const BROTLI_DEFAULT_BUFFER_SIZE: usize = 4096;
            const BROTLI_DEFAULT_COMPRESSION_QUALITY: u32 = 1; // supported levels 0-9
            const BROTLI_DEFAULT_LG_WINDOW_SIZE: u32 = 22; // recommended between 20-22

            let mut encoder = brotli::CompressorWriter::new(
                output_buf,
                BROTLI_DEFAULT_BUFFER_SIZE,
                BROTLI_DEFAULT_COMPRESSION_QUALITY,
                BROTLI_DEFAULT_LG_WINDOW_SIZE,
            );
            encoder.write_all(input_buf)?;
            encoder.flush()?;
            // the stream is terminated when the encoder is consumed
            encoder.into_inner();
            Ok(())
        }
        #[cfg(feature = "gzip")]
        Compression::Gzip => {
            use std::io::Write;
            let mut encoder = flate2::write::GzEncoder::new(output_buf, Default::default());
            encoder.write_all(input_buf)?;
            encoder.try_finish().map_err(|e| e.into())
        }
        #[cfg(feature = "snappy")]
        Compression::Snappy => {
            use snap::raw::{max_compress_len, Encoder};

            let output_buf_len = output_buf.len();
            let required_len = max_compress_len(input_buf.len());
            output_buf.resize(output_buf_len + required_len, 0);
            let n = Encoder::new().compress(input_buf, &mut output_buf[output_buf_len..])?;
            output_buf.truncate(output_buf_len + n);
            Ok(())
        }
        #[cfg(feature = "lz4")]
        Compression::Lz4 => {
            use std::io::Write;
            let mut encoder = lz4::EncoderBuilder::new().build(output_buf)?;
            encoder.write_all(input_buf)?;
            let (_, result) = encoder.finish();
            result.map_err(|e| e.into())
        }
        #[cfg(feature = "zstd")]
        Compression::Zstd => {
            use std::io::Write;
            /// Compression level (1-21) for ZSTD. Choose 1 here for better compression speed.
            const ZSTD_COMPRESSION_LEVEL: i32 = 1;

            let mut encoder = zstd::Encoder::new(output_buf, ZSTD_COMPRESSION_LEVEL)?;
            encoder.write_all(input_buf)?;
            match encoder.finish() {
                Ok(_) => Ok(()),
                Err(e) => Err(e.into()),
            }
        }
        Compression::Lzo => Err(Error::UnsupportedCodec(
            "Compression Lzo is not supported".to_string(),
        )),
        #[allow(unreachable_patterns)]
        _ => Err(inactive(compression)),
    }
}

/// Decompresses data stored in slice `input_buf` and appends the result to `output_buf`.
pub fn decompress(
    compression: Compression,
    input_buf: &[u8],
    output_buf: &mut Vec<u8>,
) -> Result<()> {
    match compression {
        Compression::Uncompressed => {
            output_buf.extend_from_slice(input_buf);
            Ok(())
        }
        #[cfg(feature = "brotli")]
        Compression::Brotli => {
            use std::io::Read;
            const BROTLI_DEFAULT_BUFFER_SIZE: usize = 4096;
            brotli::Decompressor::new(input_buf, BROTLI_DEFAULT_BUFFER_SIZE)
                .read_to_end(output_buf)
                .map(|_| ())
                .map_err(|e| e.into())
        }
        #[cfg(feature = "gzip")]
        Compression::Gzip => {
            use std::io::Read;
            let mut decoder = flate2::read::GzDecoder::new(input_buf);
            decoder
                .read_to_end(output_buf)
                .map(|_| ())
                .map_err(|e| e.into())
        }
        #[cfg(feature = "snappy")]
        Compression::Snappy => {
            use snap::raw::{decompress_len, Decoder};

            let output_buf_len = output_buf.len();
            let len = decompress_len(input_buf)?;
            output_buf.resize(output_buf_len + len, 0);
            let n = Decoder::new().decompress(input_buf, &mut output_buf[output_buf_len..])?;
            output_buf.truncate(output_buf_len + n);
            Ok(())
        }
        #[cfg(feature = "lz4")]
        Compression::Lz4 => {
            use std::io::Read;
            let mut decoder = lz4::Decoder::new(input_buf)?;
            decoder
                .read_to_end(output_buf)
                .map(|_| ())
                .map_err(|e| e.into())
        }
        #[cfg(feature = "zstd")]
        Compression::Zstd => {
            use std::io::Read;
            let mut decoder = zstd::Decoder::new(input_buf)?;
            decoder
                .read_to_end(output_buf)
                .map(|_| ())
                .map_err(|e| e.into())
        }
        Compression::Lzo => Err(Error::UnsupportedCodec(
            "Compression Lzo is not supported".to_string(),
        )),
        #[allow(unreachable_patterns)]
        _ => Err(inactive(compression)),
    }
}
