/// Greedy word wrap to at most `max_chars` characters per row.
///
/// Each `\n`-separated line is handled on its own. Empty lines survive as
/// empty rows and lines that already fit are kept verbatim. Longer lines are
/// packed word by word (words split on single spaces); a word longer than
/// `max_chars` is cut into `max_chars`-sized pieces and its remainder keeps
/// filling the next row. Lengths count `char`s, so cuts never split a UTF-8
/// sequence. A `max_chars` of zero is treated as one.
pub fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        if line.is_empty() {
            rows.push(String::new());
            continue;
        }
        if line.chars().count() <= max_chars {
            rows.push(line.to_string());
            continue;
        }
        wrap_line(line, max_chars, &mut rows);
    }
    rows
}

fn wrap_line(line: &str, max_chars: usize, rows: &mut Vec<String>) {
    let mut current = String::new();
    for word in line.split(' ') {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", current, word).trim().to_string()
        };
        if candidate.chars().count() <= max_chars {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            rows.push(core::mem::take(&mut current));
        }
        let mut rest = word;
        while rest.chars().count() > max_chars {
            let cut = byte_offset_of_char(rest, max_chars);
            rows.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
        current = rest.to_string();
    }
    if !current.is_empty() {
        rows.push(current);
    }
}

fn byte_offset_of_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_lines_pass_through_unchanged() {
        assert_eq!(wrap_text("hello", 10), vec!["hello"]);
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn long_lines_pack_words_greedily() {
        assert_eq!(
            wrap_text("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn overlong_word_is_hard_split() {
        assert_eq!(
            wrap_text("ab abcdefghijklmnop cd", 5),
            vec!["ab", "abcde", "fghij", "klmno", "p cd"]
        );
    }

    #[test]
    fn split_respects_char_boundaries() {
        let rows = wrap_text("ééééééé", 3);
        assert_eq!(rows, vec!["ééé", "ééé", "é"]);
    }

    #[test]
    fn every_row_fits_the_limit() {
        let text = "lorem ipsum dolor sit amet, consectetur adipiscing elit ".repeat(20)
            + &"x".repeat(97);
        for limit in [1, 3, 7, 16, 40] {
            for row in wrap_text(&text, limit) {
                assert!(row.chars().count() <= limit, "{:?} over {}", row, limit);
            }
        }
    }

    #[test]
    fn zero_limit_behaves_like_one() {
        assert_eq!(wrap_text("abc", 0), vec!["a", "b", "c"]);
    }

    #[test]
    fn leading_indent_of_fitting_lines_is_kept() {
        assert_eq!(wrap_text("    indented", 20), vec!["    indented"]);
    }
}
