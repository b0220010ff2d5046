use image::RgbaImage;

use super::{catalog, FilterError, FilterResult};

// ---------------------------------------------------------------------------
// The apply pipeline
// ---------------------------------------------------------------------------

/// Run one filter over one photo.
///
/// Single-shot and stateless: resolves the identifier, hands a copy of the
/// pixels to the engine, and returns the fully rendered result. The input
/// buffer is never modified, and no partially rendered buffer ever escapes.
///
/// Errors:
/// * [`FilterError::NoInput`] — no photo supplied (normal before the first
///   open; callers skip the preview update).
/// * [`FilterError::UnknownFilter`] — identifier not in the catalog.
/// * [`FilterError::NoOutput`] — the engine produced an empty or unusable
///   result; the caller keeps whatever was displayed before.
pub fn apply(input: Option<&RgbaImage>, id: &str) -> FilterResult<RgbaImage> {
    let input = input.ok_or(FilterError::NoInput)?;
    let effect = catalog::resolve(id)?;

    if input.width() == 0 || input.height() == 0 {
        return Err(FilterError::NoOutput);
    }

    let mut output = input.clone();
    effect.apply(&mut output).map_err(|_| FilterError::NoOutput)?;

    Ok(output)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
