//! Provider language codes: the fixed supported set and the alias table
//! folding common BCP-47-ish spellings onto it.

/// Codes the provider accepts (the common subset).
pub const SUPPORTED: &[&str] = &[
    "auto", "zh", "en", "yue", "wyw", "jp", "kor", "fra", "spa", "th", "ara", "ru", "pt", "de",
    "it", "el", "nl", "pl", "bul", "est", "dan", "fin", "cs", "rom", "slo", "swe", "hu", "cht",
    "vie", "id", "ms", "tr", "uk", "hi",
];

pub fn is_supported(code: &str) -> bool {
    SUPPORTED.iter().any(|c| c.eq_ignore_ascii_case(code))
}

fn alias(code: &str) -> Option<&'static str> {
    Some(match code {
        "zh-cn" | "zh_cn" | "cn" | "zh-hans" => "zh",
        "zh-tw" | "zh_tw" | "tw" | "zh-hant" | "cht" => "cht",
        "en-us" | "en_gb" | "en-uk" => "en",
        "ja" | "jpn" => "jp",
        "ko" | "kr" | "kor" => "kor",
        "fr" | "fre" => "fra",
        "es" | "spa" => "spa",
        "pt-br" | "pt-pt" => "pt",
        "deu" => "de",
        "it-it" => "it",
        "vi" => "vie",
        "ms-my" => "ms",
        "tr-tr" => "tr",
        _ => return None,
    })
}

/// Source hint: blank or unrecognized falls back to detection.
pub fn normalize_from(code: &str) -> String {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        return "auto".to_string();
    }
    if let Some(canonical) = alias(&code) {
        return canonical.to_string();
    }
    if is_supported(&code) {
        code
    } else {
        "auto".to_string()
    }
}

/// Target hint: blank falls back to the configured target; unrecognized
/// codes are lowercased and left for validation to reject.
pub fn normalize_to(code: &str, fallback: &str) -> String {
    let mut code = code.trim().to_lowercase();
    if code.is_empty() {
        code = fallback.trim().to_lowercase();
    }
    match alias(&code) {
        Some(canonical) => canonical.to_string(),
        None => code,
    }
}
