//! Colour-code markup expansion for display names.

/// Section sign that prefixes a formatting code in rendered text.
pub const ESCAPE: char = '\u{00a7}';

/// Expands a raw, user-authored string into display text.
pub trait TextFormatter {
    fn colorize(&self, raw: &str) -> String;
}

/// Rewrites `&` followed by a formatting code into `§` + code. Other
/// ampersands are left untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmpersandColorizer;

fn is_format_code(c: char) -> bool {
    matches!(c, '0'..='9' | 'a'..='g' | 'k'..='o' | 'r')
}

impl TextFormatter for AmpersandColorizer {
    fn colorize(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut chars = raw.chars().peekable();
        while let Some(c) = chars.next() {
            match chars.peek() {
                Some(&next) if c == '&' && is_format_code(next) => out.push(ESCAPE),
                _ => out.push(c),
            }
        }
        out
    }
}
