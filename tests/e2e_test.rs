// Test complete tokenizer flows built on the cursor
// Run with `cargo test --test e2e_test`

use readr::{CharClass, Cursor, Location, Reader, Regex};

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Identifier(&'a str),
    Number(&'a str),
    Float(&'a str),
    Delimiter(char),
}

struct Lexer {
    identifier: Regex,
    number: Regex,
    float: Regex,
}

impl Lexer {
    fn new() -> Self {
        Self {
            identifier: Regex::new(r"^[_a-zA-Z$][_a-zA-Z0-9]*").unwrap(),
            number: Regex::new(r"^(0|[1-9][0-9]*)").unwrap(),
            float: Regex::new(r"[0-9]+\.[0-9]+").unwrap(),
        }
    }

    fn tokenize<'a>(&self, input: &'a str) -> Vec<(Token<'a>, Location)> {
        let mut reader = Reader::from(input);
        let mut tokens = Vec::new();
        loop {
            reader.consume(" \t\n");
            if reader.eof() {
                break;
            }
            let location = reader.location();
            let token = if let Some(m) = reader.match_pattern(&self.identifier) {
                Token::Identifier(m.as_str().unwrap())
            } else if let Some(m) = reader.match_pattern(&self.float) {
                Token::Float(m.as_str().unwrap())
            } else if let Some(m) = reader.match_pattern(&self.number) {
                Token::Number(m.as_str().unwrap())
            } else {
                let c = reader.read();
                assert!(
                    b"(){};".contains(&c),
                    "Unexpected '{}' at {}",
                    c as char,
                    location
                );
                Token::Delimiter(c as char)
            };
            tokens.push((token, location));
        }
        assert!(reader.eof());
        assert_eq!(reader.checkpoints(), 0);
        tokens
    }
}

#[test]
fn e2e_test_single_line() {
    // Initialize the logger
    let _ = env_logger::builder().is_test(true).try_init();

    let lexer = Lexer::new();
    let tokens: Vec<Token> = lexer
        .tokenize("int main() { return 42; }")
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("int"),
            Token::Identifier("main"),
            Token::Delimiter('('),
            Token::Delimiter(')'),
            Token::Delimiter('{'),
            Token::Identifier("return"),
            Token::Number("42"),
            Token::Delimiter(';'),
            Token::Delimiter('}'),
        ]
    );
}

#[test]
fn e2e_test_multi_line_locations() {
    let _ = env_logger::builder().is_test(true).try_init();

    const INPUT: &str = "\nint main() {\n\treturn 42;\n}\n";
    let lexer = Lexer::new();
    let tokens = lexer.tokenize(INPUT);
    let locations: Vec<(usize, usize)> = tokens
        .iter()
        .map(|(_, l)| (l.line(), l.column()))
        .collect();
    assert_eq!(
        locations,
        vec![
            (2, 1),
            (2, 5),
            (2, 9),
            (2, 10),
            (2, 12),
            (3, 2),
            (3, 9),
            (3, 11),
            (4, 1)
        ]
    );
}

#[test]
fn e2e_test_floats_and_integers() {
    let _ = env_logger::builder().is_test(true).try_init();

    let lexer = Lexer::new();
    let tokens: Vec<Token> = lexer
        .tokenize("f(3.25; 7)")
        .into_iter()
        .map(|(t, _)| t)
        .collect();
    assert_eq!(
        tokens,
        vec![
            Token::Identifier("f"),
            Token::Delimiter('('),
            Token::Float("3.25"),
            Token::Delimiter(';'),
            Token::Number("7"),
            Token::Delimiter(')'),
        ]
    );
}

// A small recursive-descent parser for nested lists like `[1, [2, 3], []]` that uses speculation
// to parse optional trailing elements.
fn parse_list(reader: &mut Reader, digits: &CharClass) -> Option<Vec<String>> {
    reader.attempt(|r| {
        if !r.match_unit(b'[') {
            return None;
        }
        let mut items = Vec::new();
        loop {
            r.consume_whitespace();
            if r.match_unit(b']') {
                return Some(items);
            }
            if !items.is_empty() && !r.match_unit(b',') {
                return None;
            }
            r.consume_whitespace();
            if let Some(number) = r.match_pattern(digits) {
                items.push(number.to_string());
            } else {
                let nested = parse_list(r, digits)?;
                items.push(format!("[{}]", nested.join(",")));
            }
        }
    })
}

#[test]
fn e2e_test_backtracking_parser() {
    let _ = env_logger::builder().is_test(true).try_init();

    let digits = CharClass::new("[0-9]").unwrap().repeated();

    let mut reader = Reader::from("[1, [2, 3], []] rest");
    let list = parse_list(&mut reader, &digits).unwrap();
    assert_eq!(list, vec!["1", "[2,3]", "[]"]);
    assert_eq!(reader.match_any().unwrap(), " rest");

    let mut reader = Reader::from("[1, [2 3]]");
    assert_eq!(parse_list(&mut reader, &digits), None);
    assert_eq!(reader.index(), 0);
    assert_eq!(reader.checkpoints(), 0);
}

#[test]
fn e2e_test_wide_input() {
    let _ = env_logger::builder().is_test(true).try_init();

    let input: Vec<u16> = "größe = 12\nbreite = 7".encode_utf16().collect();
    let word = CharClass::new(r"\w").unwrap().repeated();
    let number = Regex::new(r"0|[1-9][0-9]*").unwrap();
    let mut cursor = Cursor::new(&input[..]);
    let mut pairs = Vec::new();
    while !cursor.eof() {
        let key = cursor.match_pattern(&word).unwrap().to_text();
        cursor.consume_whitespace();
        assert!(cursor.match_unit('=' as u16));
        cursor.consume_whitespace();
        let value = cursor.match_pattern(&number).unwrap();
        pairs.push((key, value.to_text(), cursor.location_at(value.start())));
        cursor.match_unit(u16::from(b'\n'));
    }
    assert_eq!(
        pairs,
        vec![
            ("größe".to_string(), "12".to_string(), Location::new(1, 9)),
            ("breite".to_string(), "7".to_string(), Location::new(2, 10)),
        ]
    );
}
