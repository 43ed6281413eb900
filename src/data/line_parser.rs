/// Split one line of the source file into raw text fields.
///
/// Small two-state scanner: a comma outside a quoted region ends the
/// current field, a double quote toggles the quoted region and is dropped,
/// everything else accumulates. This is deliberately not RFC 4180 —
/// embedded quote characters are stripped rather than escape-doubled, and
/// unbalanced quotes are absorbed instead of rejected. The source data
/// relies on exactly this behavior, so don't swap in a general CSV reader.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            '"' => in_quotes = !in_quotes,
            _ => current.push(ch),
        }
    }

    // The trailing field always counts, even when empty.
    fields.push(current);
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_every_delimiter_without_quotes() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
        // k delimiters always yield k+1 fields
        assert_eq!(parse_line(",,,"), vec!["", "", "", ""]);
        assert_eq!(parse_line("only"), vec!["only"]);
    }

    #[test]
    fn quoted_region_keeps_embedded_delimiter() {
        assert_eq!(parse_line("\"a,b\""), vec!["a,b"]);
        assert_eq!(parse_line("x,\"a,b\",y"), vec!["x", "a,b", "y"]);
    }

    #[test]
    fn quote_characters_are_stripped_not_preserved() {
        assert_eq!(parse_line("say \"hi\" now"), vec!["say hi now"]);
    }

    #[test]
    fn unbalanced_quote_is_absorbed() {
        // Everything after the stray quote is one quoted region
        assert_eq!(parse_line("a,\"b,c"), vec!["a", "b,c"]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(parse_line(""), vec![""]);
    }

    #[test]
    fn trailing_delimiter_yields_trailing_empty_field() {
        assert_eq!(parse_line("a,b,"), vec!["a", "b", ""]);
    }
}
