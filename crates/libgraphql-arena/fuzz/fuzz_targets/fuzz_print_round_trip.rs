#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_arena::Parser;
use libgraphql_arena::Printer;
use libgraphql_arena::ast::Document;

// Whatever parses must print to text that parses and prints identically.
fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };
    let mut parser = Parser::new();
    let mut document = Document::from_source(source);
    if parser.parse(&mut document).is_err() {
        return;
    }
    for mut printer in [Printer::new(), Printer::with_indent(2)] {
        let printed = printer.print(&document);
        let mut reparsed = Document::from_source(&printed);
        if let Err(error) = parser.parse(&mut reparsed) {
            panic!("printed output failed to parse: {error}\n{printed}");
        }
        assert_eq!(printer.print(&reparsed), printed);
    }
});
