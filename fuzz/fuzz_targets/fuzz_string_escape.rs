#![no_main]

use libfuzzer_sys::fuzz_target;
use storefront_core::query::{escape_string, Lexer, Token};

fuzz_target!(|value: String| {
    if value.len() > 4_096 {
        return;
    }

    // An escaped literal lexes back to exactly one string token
    let literal = format!("\"{}\"", escape_string(&value));
    let tokens = Lexer::new(&literal)
        .tokenize()
        .expect("escaped literal must tokenize");
    assert_eq!(tokens, vec![Token::String(value), Token::Eof]);
});
