/// Greedily wraps `text` into newline-joined lines of at most `max_length` characters.
///
/// A word joins the current line while `current_length + word_len + words_on_line`
/// stays within `max_length`, where `current_length` is the summed length of the
/// words already on the line. Words are never split: a word longer than
/// `max_length` sits on a line of its own. The last line is always emitted, so
/// the result has at least one line.
pub fn wrap_label(text: &str, max_length: usize) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut current_line: Vec<&str> = Vec::new();
    let mut current_length = 0usize;

    for word in text.split_whitespace() {
        let word_length = word.chars().count();
        if current_length + word_length + current_line.len() > max_length {
            lines.push(current_line.join(" "));
            current_line = vec![word];
            current_length = word_length;
        } else {
            current_line.push(word);
            current_length += word_length;
        }
    }
    lines.push(current_line.join(" "));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_at_word_boundaries() {
        assert_eq!(wrap_label("Cours de Mathématiques", 20), "Cours de\nMathématiques");
        assert_eq!(
            wrap_label("Travaux pratiques de chimie organique", 20),
            "Travaux pratiques de\nchimie organique"
        );
    }

    #[test]
    fn exact_width_stays_on_one_line() {
        let label = "Atelier informatique";
        assert_eq!(label.chars().count(), 20);
        assert_eq!(wrap_label(label, 20), label);

        let single = "abcdefghijklmnopqrst";
        assert_eq!(wrap_label(single, 20), single);
    }

    #[test]
    fn long_word_is_never_split() {
        let wrapped = wrap_label("Anticonstitutionnellement court", 10);
        // the first oversized word flushes the still-empty line
        assert_eq!(wrapped, "\nAnticonstitutionnellement\ncourt");
        assert!(wrapped.lines().any(|line| line == "Anticonstitutionnellement"));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 10 characters but 12 bytes
        let word = "éééééééééé";
        assert_eq!(wrap_label(&format!("{} {}", word, word), 21), format!("{} {}", word, word));
    }

    #[test]
    fn always_emits_a_line() {
        assert_eq!(wrap_label("", 20), "");
        assert_eq!(wrap_label("   ", 20), "");
        assert_eq!(wrap_label("Sport", 20), "Sport");
    }

    #[test]
    fn collapses_whitespace() {
        assert_eq!(wrap_label("  Piano \t et\nchant ", 20), "Piano et chant");
    }
}
