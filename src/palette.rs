/// (background, foreground) pairs.
///
/// Order is load-bearing: placeholders already on disk were colored by index.
pub const PALETTE: [(&str, &str); 10] = [
    ("#FF6B6B", "#FFF"),
    ("#4ECDC4", "#FFF"),
    ("#45B7D1", "#FFF"),
    ("#96CEB4", "#FFF"),
    ("#FFEAA7", "#333"),
    ("#DDA0DD", "#FFF"),
    ("#FF8C42", "#FFF"),
    ("#98D8C8", "#333"),
    ("#F7DC6F", "#333"),
    ("#BB8FCE", "#FFF"),
];

/// Entry at `index`, wrapping modulo the palette size.
pub fn pick(index: usize) -> (&'static str, &'static str) {
    PALETTE[index % PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pick_wraps_around() {
        for i in 0..PALETTE.len() {
            assert_eq!(pick(i), PALETTE[i]);
            assert_eq!(pick(i + PALETTE.len()), PALETTE[i]);
        }
        assert_eq!(pick(usize::MAX), PALETTE[usize::MAX % PALETTE.len()]);
    }

    #[test]
    fn dark_text_on_light_backgrounds() {
        assert_eq!(pick(4), ("#FFEAA7", "#333"));
        assert_eq!(pick(7), ("#98D8C8", "#333"));
        assert_eq!(pick(8), ("#F7DC6F", "#333"));
    }
}
