use flate2::CompressError;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Sink / transport errors are propagated unchanged, retries belong to the
    // transport layer
    #[error("IO Error happened: {source}")]
    IOError {
        #[from]
        source: io::Error,
    },

    // Compression engine errors
    #[error("{source}")]
    CompressError {
        #[from]
        source: CompressError,
    },

    #[error("deflate encoder used after close")]
    EncoderClosed,
}
