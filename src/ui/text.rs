use unicode_width::UnicodeWidthChar;

// Text wrapper utility
pub struct TextWrapper;

impl TextWrapper {
    /// Splits `text` on newlines, then breaks each line at word boundaries so
    /// no row is wider than `max_width` columns. Runs of spaces survive, which
    /// keeps column-aligned help output readable. A word wider than the row
    /// is cut mid-word.
    pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
        let max_width = max_width.max(1);
        let mut lines = Vec::new();

        for raw_line in text.split('\n') {
            let mut current_line = String::new();
            let mut current_width = 0;
            // Byte offset and width just past the last space on the row
            let mut break_at: Option<(usize, usize)> = None;

            for c in raw_line.chars() {
                let char_width = UnicodeWidthChar::width(c).unwrap_or(0);

                if current_width + char_width > max_width && current_width > 0 {
                    match break_at.take() {
                        Some((idx, width)) if idx < current_line.len() => {
                            let rest = current_line.split_off(idx);
                            lines.push(current_line.trim_end().to_string());
                            current_line = rest;
                            current_width -= width;
                        }
                        _ => {
                            let full = std::mem::take(&mut current_line);
                            lines.push(full.trim_end().to_string());
                            current_width = 0;
                        }
                    }
                }

                current_line.push(c);
                current_width += char_width;
                if c == ' ' {
                    break_at = Some((current_line.len(), current_width));
                }
            }

            lines.push(current_line);
        }

        lines
    }
}
