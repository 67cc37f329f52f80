//! Line-level field splitting for the supplier CSV template.
//!
//! The template promises exactly one quoting rule: double quotes around a
//! field that contains commas. Quote characters are structural and never
//! part of a field's value, and there is no `""` escape for a literal
//! quote. An unbalanced quote swallows the rest of its own line; the next
//! line starts clean.

/// Splits one raw CSV line into its ordered field values.
///
/// A comma inside a double-quoted span is field content, any other comma
/// ends the current field. Every field is trimmed of surrounding
/// whitespace, quoted or not.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        if ch == '"' {
            in_quotes = !in_quotes;
        } else if ch == ',' && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current.trim().to_string());

    fields
}

#[cfg(test)]
mod tests {
    use super::split_line;

    #[test]
    fn quoted_comma_stays_inside_its_field() {
        assert_eq!(split_line(r#"A,"B,C",D"#), vec!["A", "B,C", "D"]);
    }

    #[test]
    fn unquoted_fields_are_trimmed() {
        assert_eq!(split_line(" foo , bar "), vec!["foo", "bar"]);
    }

    #[test]
    fn quotes_never_reach_the_output() {
        assert_eq!(split_line(r#""Panadol",Paracetamol"#), vec!["Panadol", "Paracetamol"]);
    }

    #[test]
    fn join_then_split_round_trips() {
        let fields = ["Panadol Advance", "Paracetamol", "Tablet", "12,500.00"];
        let line = fields
            .iter()
            .map(|f| {
                if f.contains(',') {
                    format!("\"{}\"", f)
                } else {
                    f.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(",");
        assert_eq!(split_line(&line), fields);
    }

    #[test]
    fn unbalanced_quote_swallows_the_rest_of_the_line() {
        assert_eq!(split_line(r#"a,"b,c"#), vec!["a", "b,c"]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(split_line(""), vec![""]);
    }
}
