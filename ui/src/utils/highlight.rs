//! Highlighting of search matches inside cell text.

use egui::text::{LayoutJob, TextFormat};
use egui::{Style, TextStyle};

use super::colors::HIGHLIGHT_BG;

/// Byte ranges of case-insensitive, non-overlapping matches of `needle`.
///
/// Folds case with `str::to_lowercase`, the same rule the column search
/// filters with. Ranges are mapped back to char boundaries of `haystack`.
pub fn match_ranges(haystack: &str, needle: &str) -> Vec<std::ops::Range<usize>> {
    if needle.is_empty() {
        return Vec::new();
    }

    // `origin[i]` is the byte offset in `haystack` of the char that folded
    // into byte `i` of `folded`.
    let mut folded = String::with_capacity(haystack.len());
    let mut origin = Vec::with_capacity(haystack.len() + 1);
    for (offset, ch) in haystack.char_indices() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
            origin.resize(folded.len(), offset);
        }
    }
    origin.push(haystack.len());

    let needle = needle.to_lowercase();
    folded
        .match_indices(&needle)
        .map(|(start, matched)| origin[start]..end_of(haystack, &origin, start + matched.len()))
        .collect()
}

/// Original end offset for a match ending at folded byte `end`.
fn end_of(haystack: &str, origin: &[usize], end: usize) -> usize {
    let start = origin[end - 1];
    haystack[start..]
        .chars()
        .next()
        .map_or(haystack.len(), |ch| start + ch.len_utf8())
}

/// Lays `text` out with every match of `needle` on a highlight background.
pub fn highlighted(style: &Style, text: &str, needle: &str) -> LayoutJob {
    let font_id = TextStyle::Body.resolve(style);
    let color = style.visuals.text_color();
    let plain = TextFormat::simple(font_id.clone(), color);
    let marked = TextFormat {
        background: HIGHLIGHT_BG,
        color: egui::Color32::BLACK,
        ..TextFormat::simple(font_id, color)
    };

    let mut job = LayoutJob::default();
    let mut cursor = 0;
    for range in match_ranges(text, needle) {
        job.append(&text[cursor..range.start], 0.0, plain.clone());
        job.append(&text[range.clone()], 0.0, marked.clone());
        cursor = range.end;
    }
    job.append(&text[cursor..], 0.0, plain);
    job
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_ignore_case() {
        assert_eq!(match_ranges("Rossini", "SS"), vec![2..4]);
    }

    #[test]
    fn test_match_ranges_non_overlapping() {
        assert_eq!(match_ranges("aaaa", "aa"), vec![0..2, 2..4]);
    }

    #[test]
    fn test_match_ranges_fold_non_ascii() {
        assert_eq!(match_ranges("ÅSA Ölander", "åsa"), vec![0..4]);
        assert_eq!(match_ranges("Jon Ölander", "öl"), vec![4..7]);
        assert_eq!(match_ranges("Straße", "SSE"), Vec::<std::ops::Range<usize>>::new());
    }

    #[test]
    fn test_highlight_agrees_with_search_filter() {
        let search = tabula_business::ColumnSearch {
            field: tabula_business::Field::LastName,
            text: "ÉR".to_owned(),
        };
        let row = tabula_business::Record {
            id: 1,
            first_name: "Arya".to_owned(),
            last_name: "Févérier".to_owned(),
            age: 20,
            phone_number: "+1-000-000-0000".to_owned(),
            email: "arya.jon@gmail.com".to_owned(),
            children: None,
        };
        assert!(search.matches(&row));
        let job = highlighted(&Style::default(), &row.last_name, &search.text);
        assert_eq!(job.sections.len(), 3, "One highlight for the second syllable");
    }

    #[test]
    fn test_empty_needle_matches_nothing() {
        assert!(match_ranges("Harvey", "").is_empty());
    }

    #[test]
    fn test_highlighted_keeps_full_text() {
        let job = highlighted(&Style::default(), "Ferrara", "rr");
        assert_eq!(job.text, "Ferrara");
        assert_eq!(job.sections.len(), 3);
    }
}
