//! Input-line tokenizer.

/// Split a pipeline stage into argument tokens.
///
/// A single or double quote toggles quote mode, remembering which
/// character opened it; inside quote mode spaces do not split and the
/// other quote character is literal. Quote characters are consumed,
/// not emitted. An unterminated quote is tolerated: the rest of the
/// line is treated as quoted.
pub fn tokenize(input: &str) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut current: String = String::new();
    let mut quote: Option<char> = None;

    for ch in input.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None => match ch {
                '\'' | '"' => quote = Some(ch),
                c if c.is_whitespace() => {
                    if !current.is_empty() {
                        tokens.push(std::mem::take(&mut current));
                    }
                }
                c => current.push(c),
            },
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}
