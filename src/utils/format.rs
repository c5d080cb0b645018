use unicode_width::UnicodeWidthStr;

/// Format a count with en-US thousands separators: 1234567 -> "1,234,567"
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Right-pad to a display width, counting wide and combining characters correctly.
pub fn pad_display(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(33_333), "33,333");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn pads_to_display_width() {
        assert_eq!(pad_display("ab", 4), "ab  ");
        assert_eq!(pad_display("abcdef", 4), "abcdef");
    }
}
