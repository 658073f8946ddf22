//! Image extension repair.
//!
//! The service stores images as `<name>.png` but serves them at
//! `<name>.png.png`. References ending in a single `.png` get the suffix
//! doubled; already-doubled ones are left alone so repair is idempotent.

use std::borrow::Cow;

pub const IMAGE_SUFFIX: &str = ".png";
const DOUBLED_SUFFIX: &str = ".png.png";

pub fn repair_image_extension(reference: &str) -> Cow<'_, str> {
    if reference.ends_with(DOUBLED_SUFFIX) || !reference.ends_with(IMAGE_SUFFIX) {
        Cow::Borrowed(reference)
    } else {
        Cow::Owned(format!("{reference}{IMAGE_SUFFIX}"))
    }
}
