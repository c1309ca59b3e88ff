//! Image export — PNG encoding, data URLs, and download filenames.
//!
//! PNG is the only output format: it is lossless, so the "maximum
//! quality" export default holds by construction. Encoder settings are
//! fixed so the same surface always produces the same bytes.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::ExportError;

use super::surface::Surface;

/// Filename slug used when a title has no usable characters.
pub const FALLBACK_SLUG: &str = "ocarina-chart";

/// Maximum slug length before the timestamp is appended.
const MAX_SLUG_LEN: usize = 50;

/// Encode the surface content as PNG bytes.
pub(super) fn encode_png(surface: &Surface) -> Result<Vec<u8>, ExportError> {
    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, surface.width_px(), surface.height_px());
        encoder.set_color(ColorType::Rgba);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_compression(Compression::Default);
        encoder.set_filter(FilterType::NoFilter);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&surface.to_rgba8())?;
    }
    Ok(out)
}

/// Encode the surface content as a `data:image/png;base64,…` URL.
pub(super) fn to_data_url(surface: &Surface) -> Result<String, ExportError> {
    let bytes = encode_png(surface)?;
    Ok(format!("data:image/png;base64,{}", BASE64.encode(bytes)))
}

/// Derive a download filename from a chart title, stamped with the
/// current time: `<slug>-<YYYYMMDDHHMMSS>.png`.
pub fn generate_filename(title: &str) -> String {
    generate_filename_at(title, Utc::now())
}

/// Filename derivation with an explicit timestamp.
pub fn generate_filename_at(title: &str, timestamp: DateTime<Utc>) -> String {
    let slug = slugify(title);
    let slug = if slug.is_empty() { FALLBACK_SLUG } else { &slug };
    format!("{slug}-{}.png", timestamp.format("%Y%m%d%H%M%S"))
}

/// Reduce a title to filename-safe form: drop everything but word
/// characters, spaces and hyphens; turn whitespace runs into single
/// hyphens; collapse repeated hyphens; trim hyphens; lowercase; truncate.
fn slugify(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == '-')
        .collect();

    let mut slug = String::with_capacity(kept.len());
    let mut last_hyphen = false;
    for c in kept.chars() {
        let c = if c.is_whitespace() { '-' } else { c };
        if c == '-' {
            if !last_hyphen {
                slug.push('-');
            }
            last_hyphen = true;
        } else {
            for lc in c.to_lowercase() {
                slug.push(lc);
            }
            last_hyphen = false;
        }
    }

    let slug = slug.trim_matches('-');
    slug.chars().take(MAX_SLUG_LEN).collect()
}
