use layout21::raw::{Int, LayoutError};

#[derive(Debug, thiserror::Error)]
pub enum DiodeError {
    #[error("via span of length {len} cannot fit a single {size}nm via with {enc}nm enclosure")]
    DegenerateSpan { len: Int, size: Int, enc: Int },
    #[error("degenerate rectangle: {width}x{height}")]
    DegenerateRect { width: Int, height: Int },
    #[error("ring growth must be positive, got {growth}")]
    RingTooNarrow { growth: Int },
    #[error("unrecognized voltage class: {0}")]
    UnknownVolt(String),
    #[error("invalid params: {0}")]
    BadParams(String),

    #[error("error doing layout: {0}")]
    Layout(#[from] LayoutError),
}

pub type DiodeResult<T> = std::result::Result<T, DiodeError>;
