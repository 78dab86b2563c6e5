//! Text measurement for the two standard fonts used by the agreement.
//!
//! Widths are the Adobe AFM advance widths for Helvetica and
//! Helvetica-Bold, in 1/1000 em units, covering the printable ASCII
//! range. Characters outside the table measure at a 556-unit fallback
//! (the Helvetica average); agreement prose is ASCII.

/// The two font weights the document draws with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    /// Resource name the font is registered under in every page's
    /// resource dictionary.
    pub fn resource_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }

    /// PostScript base font name.
    pub fn base_name(&self) -> &'static str {
        match self {
            Font::Helvetica => "Helvetica",
            Font::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

/// Advance width of a character not covered by the tables.
const FALLBACK_WIDTH: u16 = 556;

/// AFM advance widths for chars 0x20..=0x7E of Helvetica.
#[rustfmt::skip]
static HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // ' ' .. ')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // '*' .. '3'
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // '4' .. '='
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // '>' .. 'G'
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // 'H' .. 'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // 'R' .. '['
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // '\' .. 'e'
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 'f' .. 'o'
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // 'p' .. 'y'
    500, 334, 260, 334, 584,                          // 'z' .. '~'
];

/// AFM advance widths for chars 0x20..=0x7E of Helvetica-Bold.
#[rustfmt::skip]
static HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, // ' ' .. ')'
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // '*' .. '3'
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584, // '4' .. '='
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778, // '>' .. 'G'
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778, // 'H' .. 'Q'
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333, // 'R' .. '['
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, // '\' .. 'e'
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 'f' .. 'o'
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, // 'p' .. 'y'
    500, 389, 280, 389, 584,                          // 'z' .. '~'
];

fn char_width(c: char, font: Font) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        font.widths()[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width in points of `text` set in `font` at `size`.
pub fn text_width(text: &str, font: Font, size: f64) -> f64 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, font))).sum();
    f64::from(units) * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_278_units_in_both_weights() {
        assert_eq!(char_width(' ', Font::Helvetica), 278);
        assert_eq!(char_width(' ', Font::HelveticaBold), 278);
    }

    #[test]
    fn digits_share_a_uniform_width() {
        for d in '0'..='9' {
            assert_eq!(char_width(d, Font::Helvetica), 556);
            assert_eq!(char_width(d, Font::HelveticaBold), 556);
        }
    }

    #[test]
    fn bold_letters_never_measure_narrower() {
        for c in ('a'..='z').chain('A'..='Z') {
            assert!(
                char_width(c, Font::HelveticaBold) >= char_width(c, Font::Helvetica),
                "char {:?}",
                c
            );
        }
    }

    #[test]
    fn width_scales_linearly_with_size() {
        let at_10 = text_width("Agreement", Font::Helvetica, 10.0);
        let at_20 = text_width("Agreement", Font::Helvetica, 20.0);
        assert!((at_20 - 2.0 * at_10).abs() < 1e-9);
    }

    #[test]
    fn non_ascii_uses_the_fallback() {
        assert_eq!(char_width('é', Font::Helvetica), FALLBACK_WIDTH);
    }
}
