//! # Frame Padding Parser Module
//!
//! Parses the numeric-frame placeholder out of a filename template.
//!
//! ## Recognized token families:
//! - printf-style with explicit width: `%04d` (width 4)
//! - bare printf token: `%d` (implicit width 1)
//! - hash runs: `#`, `####` (width = run length)
//!
//! The leftmost occurrence wins; only one token is expected per
//! template. Declared widths are capped at 16 digits; wider tokens are
//! not treated as frame padding. Parsing is pure: the same input
//! always yields the same `PaddingSpec`.
//!
//! ## Example:
//! ```
//! use footage_collector::padding::PaddingSpec;
//!
//! let spec = PaddingSpec::parse("shot010.%04d.exr").unwrap();
//! assert_eq!(spec.width, 4);
//! assert_eq!(spec.substitute("shot010.%04d.exr", 12), "shot010.0012.exr");
//! ```

use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

/// Matches `%04d` / `%d` style tokens and `#` runs
fn token_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"%0?\d*d|#+").expect("padding pattern is valid"))
}

/// Widest frame padding accepted; anything beyond is not a real
/// frame-numbering token
const MAX_WIDTH: usize = 16;

/// Frame-number padding extracted from a filename template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingSpec {
    /// The literal token matched, e.g. `%04d` or `####`
    pub token: String,
    /// Digit count frame numbers are zero-padded to, always >= 1
    pub width: usize,
    /// Byte span of the token within the parsed template
    span: Range<usize>,
}

impl PaddingSpec {
    /// Parse the leftmost padding token in a filename template.
    ///
    /// Returns `None` when no token family occurs, or when the token
    /// declares a width beyond [`MAX_WIDTH`]; callers treat that as a
    /// classification failure for the asset, not a crash.
    pub fn parse(template: &str) -> Option<Self> {
        let m = token_pattern().find(template)?;
        let token = m.as_str().to_string();

        let width = if token.starts_with('%') {
            // Digits between '%' and 'd'; a bare %d pads to one digit.
            let digits = &token[1..token.len() - 1];
            if digits.is_empty() {
                1
            } else {
                digits.parse::<usize>().ok()?.max(1)
            }
        } else {
            token.len()
        };

        if width > MAX_WIDTH {
            return None;
        }

        Some(Self {
            token,
            width,
            span: m.range(),
        })
    }

    /// Render a frame number zero-padded to this spec's width
    pub fn render_frame(&self, frame: i64) -> String {
        format!("{:0width$}", frame, width = self.width)
    }

    /// Substitute a frame number for the token span in `template`.
    ///
    /// Replaces the whole token span once; `template` must be the same
    /// string this spec was parsed from.
    pub fn substitute(&self, template: &str, frame: i64) -> String {
        let mut rendered = String::with_capacity(template.len() + self.width);
        rendered.push_str(&template[..self.span.start]);
        rendered.push_str(&self.render_frame(frame));
        rendered.push_str(&template[self.span.end..]);
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_printf_width() {
        let spec = PaddingSpec::parse("shot010.%04d.exr").unwrap();
        assert_eq!(spec.token, "%04d");
        assert_eq!(spec.width, 4);
    }

    #[test]
    fn test_bare_printf_token() {
        let spec = PaddingSpec::parse("plate.%d.dpx").unwrap();
        assert_eq!(spec.token, "%d");
        assert_eq!(spec.width, 1);
    }

    #[test]
    fn test_hash_run_width() {
        let spec = PaddingSpec::parse("plate.####.dpx").unwrap();
        assert_eq!(spec.token, "####");
        assert_eq!(spec.width, 4);

        let spec = PaddingSpec::parse("plate.#.dpx").unwrap();
        assert_eq!(spec.width, 1);
    }

    #[test]
    fn test_no_token() {
        assert!(PaddingSpec::parse("poster.jpg").is_none());
        assert!(PaddingSpec::parse("").is_none());
    }

    #[test]
    fn test_leftmost_token_wins() {
        let spec = PaddingSpec::parse("a.%02d.b.####.exr").unwrap();
        assert_eq!(spec.token, "%02d");
        assert_eq!(spec.substitute("a.%02d.b.####.exr", 5), "a.05.b.####.exr");
    }

    #[test]
    fn test_zero_width_printf_clamped() {
        let spec = PaddingSpec::parse("x.%0d.exr").unwrap();
        assert_eq!(spec.width, 1);
        assert_eq!(spec.render_frame(3), "3");
    }

    #[test]
    fn test_oversized_width_rejected() {
        assert!(PaddingSpec::parse("x.%0999999999d.exr").is_none());
        // Widths that overflow usize are rejected, not defaulted.
        assert!(PaddingSpec::parse("x.%099999999999999999999999d.exr").is_none());
        assert!(PaddingSpec::parse(&format!("x.{}.exr", "#".repeat(17))).is_none());

        let spec = PaddingSpec::parse("x.%016d.exr").unwrap();
        assert_eq!(spec.width, 16);
        assert_eq!(PaddingSpec::parse(&"#".repeat(16)).unwrap().width, 16);
    }

    #[test]
    fn test_substitute_whole_span() {
        let spec = PaddingSpec::parse("plate.####.dpx").unwrap();
        assert_eq!(spec.substitute("plate.####.dpx", 7), "plate.0007.dpx");
    }

    #[test]
    fn test_render_wider_than_padding() {
        let spec = PaddingSpec::parse("f.%02d.exr").unwrap();
        assert_eq!(spec.render_frame(1234), "1234");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let a = PaddingSpec::parse("shot.%04d.exr").unwrap();
        let b = PaddingSpec::parse("shot.%04d.exr").unwrap();
        assert_eq!(a, b);
    }
}
