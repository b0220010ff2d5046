/// Filter layer: catalog, pixel engine, and the apply pipeline.
///
/// Architecture:
/// ```text
///  identifier ("sepia" | "vignette" | "noir")
///        │
///        ▼
///   ┌──────────┐
///   │ catalog   │  identifier → fresh engine handle
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  engine   │  in-place per-pixel colour transform
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ pipeline  │  input photo → rendered output photo
///   └──────────┘
/// ```

pub mod catalog;
pub mod engine;
pub mod pipeline;

pub type FilterResult<T> = Result<T, FilterError>;

/// Everything that can go wrong between "user clicked a filter" and
/// "preview updated". None of these are fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
    /// No photo is loaded yet. The normal state before the first open;
    /// callers skip the preview update rather than surface this.
    #[error("no input photo loaded")]
    NoInput,

    /// The identifier is not in the catalog. The set of filters is closed,
    /// so hitting this means a wiring bug, not a user mistake.
    #[error("unknown filter identifier: {0:?}")]
    UnknownFilter(String),

    /// The engine produced no usable output. Recoverable: the previously
    /// displayed photo stays on screen.
    #[error("filter produced no output")]
    NoOutput,
}
