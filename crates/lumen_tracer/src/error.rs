use thiserror::Error;

/// Errors that can occur when writing a frame into a destination buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Stride of {stride} bytes is smaller than a {required}-byte row")]
    StrideTooSmall { stride: usize, required: usize },

    #[error("Buffer of {len} bytes is smaller than the {required} bytes the frame needs")]
    BufferTooSmall { len: usize, required: usize },

    #[error("Frame size {width}x{height} with stride {stride} overflows usize")]
    SizeOverflow {
        width: u32,
        height: u32,
        stride: usize,
    },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
