// src/export/layout.rs

//! Text measurement and single-line cell fitting for the PDF table.

use textwrap::core::Fragment;
use textwrap::wrap_algorithms::wrap_first_fit;

/// Marker appended to a chopped cell.
pub const ELLIPSIS: &str = "...";

/// Helvetica advance widths (1/1000 em) for ASCII 32..=126.
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // 0-9
    278, 278, 584, 584, 584, 556, 1015, // :..@
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // A-M
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // N-Z
    278, 278, 278, 469, 556, 333, // [..`
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // a-m
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // n-z
    334, 260, 334, 584, // {..~
];

/// Width used for anything outside the table (Latin-1 letters etc).
const FALLBACK_WIDTH: u16 = 556;

fn char_width(c: char) -> u16 {
    match c as u32 {
        n @ 32..=126 => HELVETICA_WIDTHS[(n - 32) as usize],
        0xD7 => 584, // ×
        _ => FALLBACK_WIDTH,
    }
}

fn units(text: &str) -> u32 {
    text.chars().map(|c| char_width(c) as u32).sum()
}

/// Rendered width of `text` in points at `font_size`.
pub fn text_width(text: &str, font_size: f32) -> f32 {
    units(text) as f32 * font_size / 1000.0
}

/// `max_width` points expressed in font units. The small slack keeps text
/// measured at exactly `max_width` on the fitting side.
fn unit_budget(max_width: f32, font_size: f32) -> f64 {
    if font_size <= 0.0 {
        return f64::INFINITY;
    }
    max_width as f64 * 1000.0 / font_size as f64 + 1e-2
}

/// One word for the first-fit wrapper, measured in font units.
#[derive(Debug)]
struct Word<'a> {
    text: &'a str,
    width: f64,
    space: f64,
}

impl Fragment for Word<'_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn whitespace_width(&self) -> f64 {
        self.space
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

fn wrap_units(text: &str, budget: f64) -> Vec<String> {
    let space = units(" ") as f64;
    let words: Vec<Word> = text
        .split_whitespace()
        .map(|w| Word {
            text: w,
            width: units(w) as f64,
            space,
        })
        .collect();

    if words.is_empty() {
        return Vec::new();
    }

    wrap_first_fit(&words, &[budget])
        .into_iter()
        .map(|line| {
            line.iter()
                .map(|w| w.text)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Greedy word-by-word wrap of `text` into lines no wider than `max_width`
/// (a single word wider than the cell gets a line of its own).
pub fn wrap_words(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    wrap_units(text, unit_budget(max_width, font_size))
}

/// What actually gets drawn in a cell: one line, possibly chopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub text: String,
    pub truncated: bool,
}

/// Fit `text` on one line of `max_width` points.
///
/// The text is wrapped first; only the first line is kept. If wrapping
/// produced more than one line, or the first line is a single word that
/// still overflows, the line is chopped until it fits with [`ELLIPSIS`].
/// Wrapping and the overflow check share the same integer measurement.
pub fn fit_cell(text: &str, max_width: f32, font_size: f32) -> CellText {
    let budget = unit_budget(max_width, font_size);
    let lines = wrap_units(text, budget);
    let Some(first) = lines.first() else {
        return CellText {
            text: String::new(),
            truncated: false,
        };
    };

    let overflow = lines.len() > 1 || units(first) as f64 > budget;
    if !overflow {
        return CellText {
            text: first.clone(),
            truncated: false,
        };
    }

    let room = budget - units(ELLIPSIS) as f64;
    let mut kept = String::new();
    let mut used = 0u32;
    for c in first.chars() {
        let w = char_width(c) as u32;
        if (used + w) as f64 > room {
            break;
        }
        used += w;
        kept.push(c);
    }

    CellText {
        text: format!("{}{}", kept.trim_end(), ELLIPSIS),
        truncated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_with_helvetica_metrics() {
        // "Hi" = 722 + 222 units
        let w = text_width("Hi", 10.0);
        assert!((w - 9.44).abs() < 0.001);
        assert_eq!(text_width("", 10.0), 0.0);
    }

    #[test]
    fn wraps_greedily_by_words() {
        let lines = wrap_words("aaa bbb ccc", text_width("aaa bbb", 10.0) + 0.1, 10.0);
        assert_eq!(lines, vec!["aaa bbb", "ccc"]);
    }

    #[test]
    fn short_text_is_drawn_as_is() {
        let cell = fit_cell("Market Rd", 100.0, 10.0);
        assert_eq!(
            cell,
            CellText {
                text: "Market Rd".into(),
                truncated: false
            }
        );
    }

    #[test]
    fn overflowing_text_shows_one_chopped_line() {
        let text = "Cleared the drainage channel along the whole stretch of Bombo Road";
        let max = 80.0;
        let cell = fit_cell(text, max, 10.0);

        assert!(cell.truncated);
        assert!(cell.text.ends_with(ELLIPSIS));
        assert_ne!(cell.text, text);
        assert!(!cell.text.contains('\n'));
        assert!(text_width(&cell.text, 10.0) <= max);

        let first = &wrap_words(text, max, 10.0)[0];
        let stem = cell.text.trim_end_matches(ELLIPSIS);
        assert!(first.starts_with(stem));
    }

    #[test]
    fn text_exactly_as_wide_as_the_cell_is_kept_whole() {
        for text in ["Street Sweeping", "Channel Clearing", "Drainage Desilting"] {
            for size in [9.0, 10.0] {
                let cell = fit_cell(text, text_width(text, size), size);
                assert_eq!(cell.text, text, "{text} at {size}pt");
                assert!(!cell.truncated);
                assert_eq!(wrap_words(text, text_width(text, size), size), vec![text]);
            }
        }
    }

    #[test]
    fn one_unit_narrower_than_the_text_is_truncated() {
        let text = "Street Sweeping";
        let cell = fit_cell(text, text_width(text, 9.0) - 0.01, 9.0);
        assert!(cell.truncated);
        assert_eq!(cell.text, "Street...");
    }

    #[test]
    fn single_long_word_is_chopped_too() {
        let cell = fit_cell("Supercalifragilisticexpialidocious", 50.0, 10.0);
        assert!(cell.truncated);
        assert!(text_width(&cell.text, 10.0) <= 50.0);
    }

    #[test]
    fn blank_cell_stays_blank() {
        let cell = fit_cell("   ", 50.0, 10.0);
        assert_eq!(cell.text, "");
        assert!(!cell.truncated);
    }
}
