//! Point text labels and text measurement heuristics.

/// Keep only the first non-empty label and the last label; blank the rest.
///
/// `[None, None, "30%", "29%", "28%", "34%"]` becomes
/// `[None, None, "30%", None, None, "34%"]`. Useful for annotating a line
/// series with its start and end values only.
pub fn endpoint_labels(labels: &[Option<String>]) -> Vec<Option<String>> {
    let mut out = vec![None; labels.len()];
    if let Some(first) = labels.iter().position(Option::is_some) {
        out[first] = labels[first].clone();
        if let Some(last) = labels.last() {
            out[labels.len() - 1] = last.clone();
        }
    }
    out
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Truncate to fit `max_px` and add a single ellipsis if needed.
pub fn truncate_to_width(text: &str, font_px: u32, max_px: u32) -> String {
    if estimate_text_width_px(text, font_px) <= max_px {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        out.push(ch);
        if estimate_text_width_px(&out, font_px) + estimate_text_width_px("…", font_px) > max_px {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn keeps_first_and_last() {
        let input = vec![None, None, s("30%"), s("29%"), s("28%"), s("34%")];
        assert_eq!(
            endpoint_labels(&input),
            vec![None, None, s("30%"), None, None, s("34%")]
        );
    }

    #[test]
    fn all_missing_stays_missing() {
        let input: Vec<Option<String>> = vec![None, None];
        assert_eq!(endpoint_labels(&input), vec![None, None]);
        assert!(endpoint_labels(&[]).is_empty());
    }

    #[test]
    fn truncation_adds_ellipsis() {
        assert_eq!(truncate_to_width("short", 10, 500), "short");
        let t = truncate_to_width("a rather long chart title", 10, 60);
        assert!(t.ends_with('…'));
        assert!(estimate_text_width_px(&t, 10) <= 60);
    }
}
