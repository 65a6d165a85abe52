//! Photo URL resolution.

use crate::places::PlaceProvider;

/// Build a displayable URL for a provider photo reference.
///
/// Returns `None` when there is no reference; otherwise the provider's photo
/// URL for that reference at `max_width` pixels.
pub fn resolve_photo_url<P: PlaceProvider>(
    provider: &P,
    photo_ref: Option<&str>,
    max_width: u32,
) -> Option<String> {
    photo_ref
        .filter(|r| !r.is_empty())
        .map(|r| provider.photo_url(r, max_width))
}
