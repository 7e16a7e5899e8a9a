//! Tolerant JSON pre-pass: knowledge documents are hand-written and often
//! carry trailing commas, which `serde_json` rejects.

use std::borrow::Cow;

/// Remove commas that directly precede `]` or `}` (ignoring whitespace),
/// leaving string contents untouched.
pub fn strip_trailing_commas(input: &str) -> Cow<'_, str> {
    let bytes = input.as_bytes();
    let mut drop = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b',' => {
                let next = bytes[i + 1..].iter().find(|c| !c.is_ascii_whitespace());
                if matches!(next, Some(b']') | Some(b'}')) {
                    drop.push(i);
                }
            }
            _ => {}
        }
    }

    if drop.is_empty() {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut last = 0;
    for i in drop {
        out.push_str(&input[last..i]);
        last = i + 1;
    }
    out.push_str(&input[last..]);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_input_is_borrowed() {
        let input = r#"{"a": [1, 2], "b": "x,]"}"#;
        assert!(matches!(strip_trailing_commas(input), Cow::Borrowed(_)));
    }

    #[test]
    fn trailing_commas_removed() {
        let input = "{\"a\": [1, 2,\n ], \"b\": {\"c\": 1,},}";
        assert_eq!(strip_trailing_commas(input), "{\"a\": [1, 2\n ], \"b\": {\"c\": 1}}");
    }

    #[test]
    fn commas_inside_strings_survive() {
        let input = r#"["a,]", "b\",}",]"#;
        assert_eq!(strip_trailing_commas(input), r#"["a,]", "b\",}"]"#);
    }
}
