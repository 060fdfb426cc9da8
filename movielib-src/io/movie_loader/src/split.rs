/// Splits one record into its fields.
///
/// A field that starts with `"` runs up to the matching closing quote and
/// may contain the delimiter; `""` inside it stands for a single quote.
pub fn split_record(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = vec![];
    let mut field = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if quoted => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    quoted = false;
                }
            }
            '"' if field.is_empty() => quoted = true,
            c if c == delimiter && !quoted => {
                fields.push(std::mem::take(&mut field))
            }
            c => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[test]
fn plain() {
    assert_eq!(split_record("a,b,,c", ','), ["a", "b", "", "c"]);
    assert_eq!(split_record("", ','), [""]);
    assert_eq!(split_record("a;b", ';'), ["a", "b"]);
}

#[test]
fn quoted() {
    assert_eq!(
        split_record(r#""Dark, Deep",Thriller,"August 5, 2019""#, ','),
        ["Dark, Deep", "Thriller", "August 5, 2019"]
    );
    assert_eq!(
        split_record(r#""say ""hi""",x"#, ','),
        [r#"say "hi""#, "x"]
    );
    assert_eq!(split_record(r#""",x"#, ','), ["", "x"]);
    // a quote inside an unquoted field is kept as is
    assert_eq!(split_record(r#"6'2"",x"#, ','), [r#"6'2"""#, "x"]);
}
