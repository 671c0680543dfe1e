#![no_main]

use libfuzzer_sys::fuzz_target;
use storefront_core::query::Lexer;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string (ignore invalid UTF-8)
    if let Ok(text) = std::str::from_utf8(data) {
        // Limit document length to prevent timeout
        if text.len() > 10_000 {
            return;
        }

        // Tokenizing should never panic
        let _ = Lexer::new(text).tokenize();
        let _ = storefront::security::validate_query(text);
    }
});
