#![no_main]
use libfuzzer_sys::fuzz_target;

use minjson::parse_document;

fuzz_target!(|data: &[u8]| {
    // We only care about inputs that are valid UTF-8.
    if let Ok(s) = std::str::from_utf8(data) {
        // Any panic in the parser is a bug; errors are fine.
        if let Ok(doc) = parse_document(s) {
            // Whatever parses must render to text that parses back
            // to the same tree.
            let rendered = doc.render();
            let again = parse_document(&rendered).expect("rendered output must re-parse");
            assert_eq!(doc, again);
        }
    }
});
