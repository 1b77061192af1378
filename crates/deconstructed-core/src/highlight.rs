//! Lightweight syntax highlighting for the concept code samples.
//!
//! A line-oriented lexer: every line is split into tokens whose texts
//! concatenate back to the original line. Block comments and multi-line
//! strings are not tracked across lines; the samples don't need them.

/// Highlighting classes, named after what they colour
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind {
    Comment,
    String,
    Number,
    Keyword,
    Function,
    Operator,
    Punctuation,
    Identifier,
    Whitespace,
    Plain,
}

impl TokenKind {
    /// CSS class for this kind
    pub fn class(&self) -> &'static str {
        match self {
            TokenKind::Comment => "tok-comment",
            TokenKind::String => "tok-string",
            TokenKind::Number => "tok-number",
            TokenKind::Keyword => "tok-keyword",
            TokenKind::Function => "tok-function",
            TokenKind::Operator => "tok-operator",
            TokenKind::Punctuation => "tok-punctuation",
            TokenKind::Identifier => "tok-identifier",
            TokenKind::Whitespace => "tok-ws",
            TokenKind::Plain => "tok-plain",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
        }
    }
}

/// One numbered line of highlighted code
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HighlightedLine {
    /// 1-based
    pub number: usize,
    pub tokens: Vec<Token>,
}

impl HighlightedLine {
    /// The original source line
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct HighlightedCode {
    pub language: Language,
    pub lines: Vec<HighlightedLine>,
}

/// Languages the lexer knows
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    JavaScript,
    TypeScript,
    Rust,
    /// Anything else; rendered without colouring
    PlainText,
}

impl Language {
    /// Resolve a language tag, falling back to plain text
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "javascript" | "js" | "jsx" => Language::JavaScript,
            "typescript" | "ts" | "tsx" => Language::TypeScript,
            "rust" | "rs" => Language::Rust,
            _ => Language::PlainText,
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Language::JavaScript => JS_KEYWORDS,
            Language::TypeScript => TS_KEYWORDS,
            Language::Rust => RUST_KEYWORDS,
            Language::PlainText => &[],
        }
    }
}

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "default",
    "delete", "do", "else", "export", "extends", "false", "finally", "for", "function", "if",
    "import", "in", "instanceof", "let", "new", "null", "return", "switch", "this", "throw",
    "true", "try", "typeof", "undefined", "var", "void", "while", "yield",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "async", "await", "boolean", "break", "case", "catch", "class",
    "const", "continue", "declare", "default", "do", "else", "enum", "export", "extends",
    "false", "for", "function", "if", "implements", "import", "interface", "let", "new",
    "null", "number", "private", "public", "readonly", "return", "string", "switch", "this",
    "throw", "true", "try", "type", "typeof", "undefined", "void", "while",
];

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "else", "enum", "false",
    "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub",
    "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true", "type",
    "unsafe", "use", "where", "while",
];

const OPERATOR_CHARS: &str = "+-*/%=<>!&|^~?:";
const PUNCTUATION_CHARS: &str = "()[]{}.,;";

/// Highlight `code` using the given language tag
pub fn highlight(code: &str, lang: &str) -> HighlightedCode {
    let language = Language::from_tag(lang);
    let lines = code
        .split('\n')
        .enumerate()
        .map(|(i, line)| HighlightedLine {
            number: i + 1,
            tokens: tokenize_line(line, language),
        })
        .collect();

    HighlightedCode { language, lines }
}

fn tokenize_line(line: &str, language: Language) -> Vec<Token> {
    if language == Language::PlainText {
        return if line.is_empty() {
            Vec::new()
        } else {
            vec![Token::new(TokenKind::Plain, line)]
        };
    }

    let keywords = language.keywords();
    let mut tokens = Vec::new();
    let mut rest = line;

    while let Some(c) = rest.chars().next() {
        let len = if rest.starts_with("//") {
            tokens.push(Token::new(TokenKind::Comment, rest));
            break;
        } else if c == '"' || c == '\'' || c == '`' {
            let len = string_len(rest, c);
            tokens.push(Token::new(TokenKind::String, &rest[..len]));
            len
        } else if c.is_whitespace() {
            let len = span_len(rest, char::is_whitespace);
            tokens.push(Token::new(TokenKind::Whitespace, &rest[..len]));
            len
        } else if c.is_ascii_digit() {
            let len = span_len(rest, |c| c.is_ascii_digit());
            tokens.push(Token::new(TokenKind::Number, &rest[..len]));
            len
        } else if c.is_alphabetic() || c == '_' || c == '$' {
            let len = span_len(rest, |c| c.is_alphanumeric() || c == '_' || c == '$');
            let word = &rest[..len];
            let kind = if keywords.contains(&word) {
                TokenKind::Keyword
            } else if rest[len..].starts_with('(') {
                TokenKind::Function
            } else {
                TokenKind::Identifier
            };
            tokens.push(Token::new(kind, word));
            len
        } else if OPERATOR_CHARS.contains(c) {
            let len = span_len(rest, |c| OPERATOR_CHARS.contains(c));
            // a `//` inside an operator run starts a comment
            let len = rest[..len].find("//").filter(|&i| i > 0).unwrap_or(len);
            tokens.push(Token::new(TokenKind::Operator, &rest[..len]));
            len
        } else if PUNCTUATION_CHARS.contains(c) {
            let len = c.len_utf8();
            tokens.push(Token::new(TokenKind::Punctuation, &rest[..len]));
            len
        } else {
            let len = c.len_utf8();
            tokens.push(Token::new(TokenKind::Plain, &rest[..len]));
            len
        };
        rest = &rest[len..];
    }

    tokens
}

/// Byte length of the leading run of chars matching `pred`
fn span_len(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Byte length of a string literal opened by `quote`, or the rest of the line
fn string_len(s: &str, quote: char) -> usize {
    let mut escaped = false;
    for (i, c) in s.char_indices().skip(1) {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return i + c.len_utf8();
        }
    }
    s.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &HighlightedLine) -> Vec<TokenKind> {
        line.tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn comment_line_is_one_token() {
        let code = highlight("// STATE", "javascript");
        assert_eq!(code.lines.len(), 1);
        assert_eq!(kinds(&code.lines[0]), vec![TokenKind::Comment]);
    }

    #[test]
    fn strings_keywords_and_calls() {
        let code = highlight("const n = setCount('a', 1);", "js");
        let line = &code.lines[0];
        let find = |text: &str| line.tokens.iter().find(|t| t.text == text).map(|t| t.kind);
        assert_eq!(find("const"), Some(TokenKind::Keyword));
        assert_eq!(find("n"), Some(TokenKind::Identifier));
        assert_eq!(find("="), Some(TokenKind::Operator));
        assert_eq!(find("setCount"), Some(TokenKind::Function));
        assert_eq!(find("'a'"), Some(TokenKind::String));
        assert_eq!(find("1"), Some(TokenKind::Number));
        assert_eq!(find(";"), Some(TokenKind::Punctuation));
        assert_eq!(line.text(), "const n = setCount('a', 1);");
    }

    #[test]
    fn unterminated_string_runs_to_end_of_line() {
        let code = highlight("WHEN \"Increment is clicked", "javascript");
        let last = code.lines[0].tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::String);
        assert_eq!(last.text, "\"Increment is clicked");
    }

    #[test]
    fn escaped_quote_stays_inside_string() {
        let code = highlight(r#"x = "a\"b" + 1"#, "js");
        assert!(code.lines[0]
            .tokens
            .iter()
            .any(|t| t.kind == TokenKind::String && t.text == r#""a\"b""#));
    }

    #[test]
    fn operator_run_then_comment() {
        let code = highlight("a =// note", "js");
        let line = &code.lines[0];
        assert_eq!(line.tokens.last().unwrap().kind, TokenKind::Comment);
        assert_eq!(line.text(), "a =// note");
    }

    #[test]
    fn line_numbers_start_at_one_and_keep_empty_lines() {
        let code = highlight("a\n\nb", "javascript");
        let numbers: Vec<_> = code.lines.iter().map(|l| l.number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert!(code.lines[1].tokens.is_empty());
    }

    #[test]
    fn unicode_box_drawing_survives() {
        let src = " └─ Counter";
        let code = highlight(src, "javascript");
        assert_eq!(code.lines[0].text(), src);
    }

    #[test]
    fn unknown_language_is_plain() {
        let code = highlight("let x = 1;", "cobol");
        assert_eq!(code.language, Language::PlainText);
        assert_eq!(kinds(&code.lines[0]), vec![TokenKind::Plain]);
    }

    #[test]
    fn language_tags() {
        assert_eq!(Language::from_tag("JavaScript"), Language::JavaScript);
        assert_eq!(Language::from_tag("tsx"), Language::TypeScript);
        assert_eq!(Language::from_tag("rs"), Language::Rust);
    }
}
