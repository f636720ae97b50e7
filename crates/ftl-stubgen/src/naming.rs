//! Naming and quoting utilities for Kotlin output.
//!
//! # Supported Conversions
//!
//! | Input | Function | Output |
//! |-------|----------|--------|
//! | `payments` | [`capitalize`] | `Payments` |
//! | `fun` | [`escape_identifier`] | `` `fun` `` |
//! | `a"b$c` | [`string_literal`] | `"a\"b\$c"` |
//! | `a */ b` | [`kdoc_line`] | `a *&#47; b` |
//! | `a /* b` | [`kdoc_line`] | `a /&#42; b` |

/// Kotlin hard keywords, which need backticks when used as identifiers.
const HARD_KEYWORDS: &[&str] = &[
    "as", "break", "class", "continue", "do", "else", "false", "for", "fun", "if", "in",
    "interface", "is", "null", "object", "package", "return", "super", "this", "throw", "true",
    "try", "typealias", "typeof", "val", "var", "when", "while",
];

/// Capitalize the first letter of a string.
///
/// # Examples
///
/// ```
/// use ftl_stubgen::naming::capitalize;
///
/// assert_eq!(capitalize("payments"), "Payments");
/// assert_eq!(capitalize("echo"), "Echo");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Whether `s` is a plain Kotlin identifier that needs no quoting.
pub fn is_plain_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let starts_ok = matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic());
    starts_ok && chars.all(|c| c == '_' || c.is_alphanumeric())
}

/// Whether `s` can be written as a Kotlin identifier, backticked if needed.
///
/// Backticks do not admit everything: the JVM rejects `.;[]/<>:\` in names,
/// and a backtick, newline or other control character would end the quote.
///
/// # Examples
///
/// ```
/// use ftl_stubgen::naming::is_quotable_identifier;
///
/// assert!(is_quotable_identifier("first-name"));
/// assert!(!is_quotable_identifier("a.b"));
/// assert!(!is_quotable_identifier(""));
/// ```
pub fn is_quotable_identifier(s: &str) -> bool {
    !s.is_empty()
        && !s.chars().any(|c| {
            matches!(c, '`' | '.' | ';' | '[' | ']' | '/' | '<' | '>' | ':' | '\\')
                || c.is_control()
        })
}

/// Quote an identifier with backticks if it is a keyword or not a plain identifier.
///
/// `s` must satisfy [`is_quotable_identifier`]; the emitter rejects other
/// names before they reach the renderer.
///
/// # Examples
///
/// ```
/// use ftl_stubgen::naming::escape_identifier;
///
/// assert_eq!(escape_identifier("amount"), "amount");
/// assert_eq!(escape_identifier("in"), "`in`");
/// assert_eq!(escape_identifier("first-name"), "`first-name`");
/// ```
pub fn escape_identifier(s: &str) -> String {
    if is_plain_identifier(s) && !HARD_KEYWORDS.contains(&s) {
        s.to_string()
    } else {
        format!("`{s}`")
    }
}

/// Escape each segment of a dotted name, e.g. a package.
pub fn escape_dotted(s: &str) -> String {
    s.split('.')
        .map(escape_identifier)
        .collect::<Vec<_>>()
        .join(".")
}

/// Whether `s` is a dotted sequence of plain identifiers, e.g. `ftl` or `com.example.ftl`.
pub fn is_package_name(s: &str) -> bool {
    !s.is_empty() && s.split('.').all(is_plain_identifier)
}

/// Render a Kotlin string literal, escaping quotes, backslashes, templates and control characters.
pub fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '$' => out.push_str("\\$"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Make a documentation line safe to place inside a KDoc block.
///
/// Kotlin block comments nest, so both the opener and the terminator are
/// neutralised. The opener goes first; `*/*` would otherwise leave a `/*`.
///
/// # Examples
///
/// ```
/// use ftl_stubgen::naming::kdoc_line;
///
/// assert_eq!(kdoc_line("in cents /* not dollars"), "in cents /&#42; not dollars");
/// assert_eq!(kdoc_line("ends */ here"), "ends *&#47; here");
/// ```
pub fn kdoc_line(s: &str) -> String {
    s.replace("/*", "/&#42;").replace("*/", "*&#47;")
}
