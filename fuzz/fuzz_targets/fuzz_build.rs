#![no_main]

use libfuzzer_sys::fuzz_target;
use sufx::SuffixTreeBuilder;

fuzz_target!(|data: &[u8]| {
    // Pick a sentinel absent from the input; skip inputs that use all 256 bytes
    let Some(sentinel) = (0..=u8::MAX).find(|b| !data.contains(b)) else {
        return;
    };

    match SuffixTreeBuilder::new(data).sentinel(sentinel).build() {
        Ok(tree) => {
            if let Err(violation) = tree.check() {
                panic!("invalid tree for {:?}: {}", data, violation);
            }
        }
        Err(err) => assert!(data.is_empty(), "unexpected error: {}", err),
    }
});
