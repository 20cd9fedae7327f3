//! Adapter over the Windows.Media.Ocr backend.

/// Map a user-facing language hint to backend language-pack tags, tried in
/// order. "auto" casts the widest (and slowest) net.
pub fn language_tags(hint: &str) -> &'static [&'static str] {
    match hint.to_lowercase().as_str() {
        "zh" => &["zh-Hans", "en"],
        "jp" | "ja" => &["ja", "en"],
        "en" => &["en"],
        "kor" | "ko" => &["ko"],
        _ => &["zh-Hans", "en", "ja", "ko"],
    }
}

/// Recognize text in PNG-encoded image bytes.
///
/// CPU-bound and blocking; callers run it on a worker thread with a
/// [`crate::ComGuard`] held. A missing language pack is a reported,
/// non-fatal condition: it logs a diagnostic and yields empty text.
#[cfg(target_os = "windows")]
pub fn recognize_png(png_bytes: &[u8], language_hint: &str) -> anyhow::Result<String> {
    use anyhow::Context;
    use windows::{
        Globalization::Language,
        Graphics::Imaging::BitmapDecoder,
        Media::Ocr::OcrEngine,
        Storage::Streams::{DataWriter, InMemoryRandomAccessStream},
        core::HSTRING,
    };

    let engine = language_tags(language_hint).iter().find_map(|tag| {
        let language = Language::CreateLanguage(&HSTRING::from(*tag)).ok()?;
        OcrEngine::TryCreateFromLanguage(&language).ok()
    });

    let Some(engine) = engine else {
        tracing::warn!(
            hint = language_hint,
            "no OCR language pack available; install one for {:?}",
            language_tags(language_hint)
        );
        return Ok(String::new());
    };

    let stream = InMemoryRandomAccessStream::new().context("Failed to create stream")?;
    let writer = DataWriter::CreateDataWriter(&stream).context("Failed to create writer")?;

    writer
        .WriteBytes(png_bytes)
        .context("Failed to write image bytes")?;
    writer
        .StoreAsync()
        .context("Failed to store async")?
        .get()
        .context("Failed to store data")?;
    writer.FlushAsync().context("Failed to flush")?.get()?;

    stream.Seek(0).context("Failed to seek")?;

    let decoder = BitmapDecoder::CreateAsync(&stream)
        .context("Failed to create decoder")?
        .get()
        .context("Failed to decode image")?;

    let bitmap = decoder
        .GetSoftwareBitmapAsync()
        .context("Failed to get bitmap async")?
        .get()
        .context("Failed to get software bitmap")?;

    let result = engine
        .RecognizeAsync(&bitmap)
        .context("Failed to recognize async")?
        .get()
        .context("Failed to get OCR result")?;

    Ok(result.Text().context("Failed to get text")?.to_string())
}

#[cfg(not(target_os = "windows"))]
pub fn recognize_png(_png_bytes: &[u8], language_hint: &str) -> anyhow::Result<String> {
    tracing::warn!(
        hint = language_hint,
        "OCR backend unavailable on this platform"
    );
    Ok(String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_map_to_expected_packs() {
        assert_eq!(language_tags("zh"), &["zh-Hans", "en"][..]);
        assert_eq!(language_tags("jp"), &["ja", "en"][..]);
        assert_eq!(language_tags("en"), &["en"][..]);
        assert_eq!(language_tags("kor"), &["ko"][..]);
    }

    #[test]
    fn unknown_hints_fall_back_to_the_broad_set() {
        let broad = &["zh-Hans", "en", "ja", "ko"][..];
        assert_eq!(language_tags("auto"), broad);
        assert_eq!(language_tags(""), broad);
        assert_eq!(language_tags("xx"), broad);
    }

    #[test]
    fn hint_matching_is_case_insensitive() {
        assert_eq!(language_tags("ZH"), language_tags("zh"));
        assert_eq!(language_tags("Kor"), language_tags("kor"));
    }
}
