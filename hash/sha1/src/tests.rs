extern crate std;

use self::std::vec::Vec;
use hash_digest::{digest, digest_scattered};
use hash_tests::hash::{chunked_equivalence, hex_str, main_test, one_million_a, Test};

use super::Sha1;

#[test]
fn sha1_main() {
    // Vectors from FIPS 180-1 and wikipedia
    let tests = [
        Test {
            name: "empty",
            input: b"",
            output_str: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
        },
        Test {
            name: "abc",
            input: b"abc",
            output_str: "a9993e364706816aba3e25717850c26c9cd0d89d",
        },
        Test {
            name: "two_block",
            input: b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq",
            output_str: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
        },
        Test {
            name: "fox",
            input: b"The quick brown fox jumps over the lazy dog",
            output_str: "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12",
        },
        Test {
            name: "cog",
            input: b"The quick brown fox jumps over the lazy cog",
            output_str: "de9f2c7fd25e1b3afad3e85a0bd17d9b100db4b3",
        },
    ];
    main_test::<Sha1>(&tests);
}

#[test]
fn sha1_streaming_equivalence() {
    let input: Vec<u8> = (0..300u16).map(|i| (i * 5) as u8).collect();
    chunked_equivalence::<Sha1>(&input);
}

#[test]
fn sha1_scattered() {
    let chunks: [&[u8]; 2] = [b"The quick brown fox ", b"jumps over the lazy dog"];
    let out = digest_scattered::<Sha1>(&chunks);
    assert_eq!(
        out,
        digest::<Sha1>(b"The quick brown fox jumps over the lazy dog")
    );
    assert_eq!(hex_str(&out), "2fd4e1c67a2d28fced849ee1bb76e7391b93eb12");
}

#[test]
fn sha1_1million_a() {
    one_million_a::<Sha1>("34aa973cd4c4daa4f61eeb2bdbad27316534016f");
}
