//! Display grouping ("explode") for cipher output

/// Characters per block
pub const GROUP_SIZE: usize = 5;

/// Split `text` into blocks of [`GROUP_SIZE`] characters separated by a
/// single space.
///
/// Purely cosmetic. Grouped text must not be fed back into the cipher: the
/// separators would be treated as part of the message.
pub fn explode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / GROUP_SIZE);
    for (i, c) in text.chars().enumerate() {
        if i > 0 && i % GROUP_SIZE == 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks() {
        assert_eq!(explode("RVYNISVJUJ"), "RVYNI SVJUJ");
        assert_eq!(explode("ABCDEFG"), "ABCDE FG");
        assert_eq!(explode("ABCD"), "ABCD");
    }

    #[test]
    fn test_empty() {
        assert_eq!(explode(""), "");
    }

    #[test]
    fn test_separator_count() {
        for len in 1..40 {
            let text = "x".repeat(len);
            let grouped = explode(&text);
            assert_eq!(grouped.chars().count(), len + (len - 1) / GROUP_SIZE);
            assert_eq!(grouped, explode(&text));
        }
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(explode("ééééééé"), "ééééé éé");
    }
}
