#![no_main]

use arith::format::format_source;
use arith::{lexer, parser};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Staged and one-shot parsing must agree
        let staged = lexer::tokenize(s).map_err(|_| ()).and_then(|tokens| parser::parse(&tokens).map_err(|_| ()));
        assert_eq!(staged.is_ok(), parser::parse_program(s).is_ok());

        // Canonical output is stable
        if let Ok(once) = format_source(s) {
            let twice = format_source(&once).unwrap_or_default();
            assert_eq!(once, twice);
        }
    }
});
