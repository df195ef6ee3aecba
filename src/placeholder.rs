use md5::{Digest, Md5};

use crate::palette;

/// Text shown when a name has nothing usable left after normalization.
const UNKNOWN_INITIALS: &str = "?";

/// Everything that varies between two placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    pub initials: String,
    pub background: &'static str,
    pub foreground: &'static str,
}

pub fn generate(name: &str) -> String {
    render(&appearance(name))
}

pub fn appearance(name: &str) -> Appearance {
    let (background, foreground) = palette::pick(palette_index(name));

    Appearance {
        initials: initials(name),
        background,
        foreground,
    }
}

/// 1-2 uppercase letters for the avatar.
///
/// `_`, `-` and `.` count as word separators. With two or more words the
/// first letter of each of the first two is used, otherwise the first two
/// characters of the single word.
pub fn initials(name: &str) -> String {
    let normalized = name.replace(|c: char| matches!(c, '_' | '-' | '.'), " ");
    let normalized = normalized.trim_matches(is_word_break);

    let mut words = normalized.split(is_word_break).filter(|s| !s.is_empty());
    if let (Some(first), Some(second)) = (words.next(), words.next()) {
        return first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect::<String>()
            .to_uppercase();
    }

    if normalized.is_empty() {
        return UNKNOWN_INITIALS.into();
    }

    normalized.chars().take(2).collect::<String>().to_uppercase()
}

/// Unicode whitespace plus the ASCII information separators U+001C..=U+001F,
/// which existing avatars were generated with as word breaks.
fn is_word_break(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Palette slot for `name`, taken from the MD5 of its raw bytes.
///
/// The leading 32 bits of the digest (its first 8 hex digits) are reduced
/// modulo the palette size. Changing the hash recolors every existing avatar.
pub fn palette_index(name: &str) -> usize {
    let digest = Md5::digest(name.as_bytes());
    let prefix = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);

    prefix as usize % palette::PALETTE.len()
}

pub fn render(appearance: &Appearance) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="400" viewBox="0 0 400 400">
  <rect width="400" height="400" rx="200" fill="{bg}"/>
  <text x="200" y="200" text-anchor="middle" dominant-baseline="central"
        font-family="system-ui, -apple-system, sans-serif"
        font-size="160" font-weight="600" fill="{fg}">{initials}</text>
</svg>"#,
        bg = appearance.background,
        fg = appearance.foreground,
        initials = appearance.initials,
    )
}
