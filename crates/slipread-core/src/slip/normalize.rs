//! OCR text cleanup ahead of the line walk.

/// Synthetic line standing in for the "make by KBank" signature block.
pub const BRAND_SENTINEL: &str = "<Brand>";

/// Literal noise removed from every slip.
const NOISE_PHRASES: [&str; 3] = [
    "PAYMENT COMPLETED",
    "Scan to verify",
    // OCR reading of the success icon
    "CULO",
];

// Two-line variant first, so the one-line pass never sees half of it.
const BRAND_VARIANTS: [&str; 2] = ["make\nby KBank", "make by KBank"];

/// Strip known noise and collapse the brand signature into [`BRAND_SENTINEL`].
pub fn normalize(raw: &str) -> String {
    normalize_with::<&str>(raw, &[])
}

/// Like [`normalize`], also removing caller-supplied noise phrases.
pub fn normalize_with<S: AsRef<str>>(raw: &str, extra_noise: &[S]) -> String {
    let mut text = raw.to_string();

    for phrase in NOISE_PHRASES
        .iter()
        .copied()
        .chain(extra_noise.iter().map(|p| p.as_ref()))
        .filter(|p| !p.is_empty())
    {
        text = text.replace(phrase, "");
    }

    for variant in BRAND_VARIANTS {
        text = text.replace(variant, BRAND_SENTINEL);
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_noise() {
        assert_eq!(
            normalize("PAYMENT COMPLETED\nCULO\nQR Code: Scan to verify"),
            "\n\nQR Code: "
        );
    }

    #[test]
    fn test_brand_variants() {
        assert_eq!(normalize("a\nmake\nby KBank\nb"), "a\n<Brand>\nb");
        assert_eq!(normalize("a\nmake by KBank\nb"), "a\n<Brand>\nb");
    }

    #[test]
    fn test_keeps_line_structure() {
        let text = "TEAM T\n  xxx-x-x5304-x \n\nAmount";
        assert_eq!(normalize(text), text);
    }

    #[test]
    fn test_extra_noise() {
        assert_eq!(
            normalize_with("TRANSFER\nCOMPLETED\nTEAM T", &["TRANSFER\n", "COMPLETED"]),
            "\nTEAM T"
        );
    }
}
