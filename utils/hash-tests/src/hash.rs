use hash_digest::{digest, Digest};

/// A known-answer test case. Expected output is lowercase hex, the form
/// reference vectors are published in.
pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output_str: &'static str,
}

/// Format a digest as a lowercase hex string.
pub fn hex_str(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Run known-answer tests, feeding each message both all at once and in
/// successively halved pieces.
pub fn main_test<D: Digest>(tests: &[Test]) {
    // Test that it works when accepting the message all at once
    for t in tests.iter() {
        assert_eq!(hex_str(&digest::<D>(t.input)), t.output_str, "{}", t.name);
    }

    // Test that it works when accepting the message in pieces
    for t in tests.iter() {
        let mut sh = D::new();
        let len = t.input.len();
        let mut left = len;
        while left > 0 {
            let take = (left + 1) / 2;
            sh.input(&t.input[len - left..take + len - left]);
            left -= take;
        }

        assert_eq!(hex_str(&sh.result()), t.output_str, "{} (pieces)", t.name);
    }
}

/// Feed `input` in fixed-size chunks straddling the 64-byte block boundary
/// (on it, one before, one after) and check every chunking matches the
/// one-shot digest.
pub fn chunked_equivalence<D: Digest>(input: &[u8]) {
    let expected = digest::<D>(input);

    for &size in &[1usize, 3, 63, 64, 65, 127, 128, 129] {
        let mut sh = D::new();
        for chunk in input.chunks(size) {
            sh.input(chunk);
        }
        assert_eq!(sh.result(), expected, "chunk size {}", size);
    }
}

/// The classic FIPS 180 extended test: one million repetitions of `a`,
/// fed in uneven pieces.
pub fn one_million_a<D: Digest>(output_str: &str) {
    let mut sh = D::new();
    for _ in 0..50000 {
        sh.input(&[b'a'; 10]);
    }
    sh.input(&[b'a'; 500000]);
    assert_eq!(hex_str(&sh.result()), output_str);
}
