#![no_main]

use libfuzzer_sys::fuzz_target;
use monkey_syntax::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // The lexer never fails; the token stream must end in exactly one EOF
        let tokens = lexer::lex(s);
        assert_eq!(tokens.iter().filter(|t| t.kind == lexer::TokenKind::Eof).count(), 1);

        // Parsing must not panic, whatever the error count
        let _ = parser::parse(s);
    }
});
