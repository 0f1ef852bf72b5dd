//! Fixed-width text layout primitives.
//!
//! Width arithmetic counts characters, not bytes — "№" occupies one
//! column. Centering never truncates; justified text truncates to the
//! leading characters of the field, matching fixed-width format semantics.

/// Cell alignment within a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Center `label + value` within `width` columns.
///
/// Leading padding is `floor((width - len) / 2)`; trailing padding fills
/// the remainder, so odd padding biases left. Content wider than the field
/// is emitted as-is, unpadded and untruncated.
pub fn center(label: &str, value: &str, width: usize) -> String {
    let len = label.chars().count() + value.chars().count();
    let pad = width.saturating_sub(len);
    let lead = pad / 2;
    let mut out = String::with_capacity(width.max(len));
    out.extend(std::iter::repeat_n(' ', lead));
    out.push_str(label);
    out.push_str(value);
    out.extend(std::iter::repeat_n(' ', pad - lead));
    out
}

/// Justify `text` into exactly `width` columns.
///
/// Text longer than the field keeps its leading `width` characters.
/// `Center` delegates to [`center`], which pads but never truncates.
pub fn justify(text: &str, width: usize, alignment: Alignment) -> String {
    if alignment == Alignment::Center {
        return center("", text, width);
    }
    let truncated: String = text.chars().take(width).collect();
    let pad = width - truncated.chars().count();
    match alignment {
        Alignment::Right => format!("{}{}", " ".repeat(pad), truncated),
        _ => format!("{}{}", truncated, " ".repeat(pad)),
    }
}

/// One `|`-bounded table row, newline-terminated.
///
/// Cell values are trimmed before alignment. The three slices must have
/// equal length.
pub fn table_row(widths: &[usize], alignments: &[Alignment], values: &[&str]) -> String {
    debug_assert_eq!(widths.len(), alignments.len());
    debug_assert_eq!(widths.len(), values.len());

    let mut row = String::from("|");
    for ((&width, &alignment), value) in widths.iter().zip(alignments).zip(values) {
        row.push_str(&justify(value.trim(), width, alignment));
        row.push('|');
    }
    row.push('\n');
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_with_even_padding() {
        assert_eq!(center("", "X", 5), "  X  ");
    }

    #[test]
    fn odd_padding_biases_left() {
        // width 5, content 2 → leading 1, trailing 2
        assert_eq!(center("A", "B", 5), " AB  ");
        assert_eq!(center("A", "B", 4), " AB ");
    }

    #[test]
    fn exact_fit_gets_no_padding() {
        assert_eq!(center("Quantity", "", 8), "Quantity");
    }

    #[test]
    fn overflowing_content_is_not_truncated() {
        assert_eq!(center("Number: ", "0000000001", 10), "Number: 0000000001");
    }

    #[test]
    fn centered_cell_fills_width() {
        let cell = justify("pcs", 8, Alignment::Center);
        assert_eq!(cell.chars().count(), 8);
        assert_eq!(cell, "  pcs   ");
    }

    #[test]
    fn justified_text_truncates_to_leading_chars() {
        assert_eq!(justify("abcdefg", 5, Alignment::Right), "abcde");
        assert_eq!(justify("abcdefg", 5, Alignment::Left), "abcde");
        assert_eq!(justify("ab", 5, Alignment::Right), "   ab");
        assert_eq!(justify("ab", 5, Alignment::Left), "ab   ");
    }

    #[test]
    fn width_counts_chars_not_bytes() {
        // "№" is multi-byte but one column wide
        assert_eq!(justify("№", 2, Alignment::Right).chars().count(), 2);
        assert_eq!(center("", "№", 3), " № ");
    }

    #[test]
    fn row_is_piped_and_newline_terminated() {
        let row = table_row(
            &[2, 5],
            &[Alignment::Right, Alignment::Center],
            &["0", " pcs "],
        );
        assert_eq!(row, "| 0| pcs |\n");
    }

    #[test]
    fn row_width_is_constant() {
        let widths = [2usize, 33, 8, 5, 8, 9, 8];
        let aligns = [Alignment::Center; 7];
        let row = table_row(
            &widths,
            &aligns,
            &["№", "Name", "Quantity", "Unit", "Price", "VAT Price", "Total"],
        );
        // sum of widths + 8 pipes + newline
        let expected = widths.iter().sum::<usize>() + widths.len() + 1 + 1;
        assert_eq!(row.chars().count(), expected);
    }
}
