#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: Vec<u8>,
    pattern: Vec<u8>,
}

fuzz_target!(|input: Input| {
    // Queries never panic, whether or not construction succeeds
    let Ok(tree) = sufx::build_suffix_tree(&input.text) else {
        return;
    };

    let mut full = input.text.clone();
    full.push(0);
    let expected: Vec<usize> = (0..full.len())
        .filter(|&i| full[i..].starts_with(&input.pattern))
        .collect();

    assert_eq!(tree.contains(&input.pattern), !expected.is_empty());
    assert_eq!(tree.occurrences(&input.pattern), expected);
});
