#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_arena::Input;
use libgraphql_arena::Lexer;
use libgraphql_arena::token::Keyword;

fuzz_target!(|data: &[u8]| {
    let mut input = Input::new();
    input.reset_input_bytes(data);
    let mut lexer = Lexer::new();
    loop {
        let offset = lexer.offset();
        if lexer.read(&input).keyword == Keyword::Eof {
            break;
        }
        assert!(lexer.offset() > offset, "lexer made no progress at byte {offset}");
    }
});
