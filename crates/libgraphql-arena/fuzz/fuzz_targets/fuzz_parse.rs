#![no_main]

use libfuzzer_sys::fuzz_target;
use libgraphql_arena::parse_graphql_document_bytes;

fuzz_target!(|data: &[u8]| {
    let _ = parse_graphql_document_bytes(data);
});
