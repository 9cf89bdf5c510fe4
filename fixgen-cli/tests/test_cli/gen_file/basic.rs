use crate::add_test;
use crate::common::{Fixture, COUNTER};
use crate::{KB, MB};

// Without arguments 2 MiB of random data is written to ./data.bin
add_test!(default_random_data_bin, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("gen-file", &[]).await;
    assert!(output.status.success(), "{}", output.stderr);

    assert_eq!(fixture.read("data.bin").len(), 2 * MB);
});

// Constant byte file
add_test!(constant_byte_file, async {
    let fixture = Fixture::new();
    let path = fixture.path("out.bin");

    let output = fixture
        .run_cargo("gen-file", &["--byte", "0xAA", "-s", "1K", &path])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_constant("out.bin", KB, 0xAA);
});

// Repeating sequence file, 32 bytes hold the counter twice
add_test!(sequence_file, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_cargo(
            "gen-file",
            &["--sequence", "000102030405060708090a0b0c0d0e0f", "-s", "32", "seq.bin"],
        )
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    let mut expected = COUNTER.to_vec();
    expected.extend_from_slice(&COUNTER);
    assert_eq!(fixture.read("seq.bin"), expected);
});

// An existing file is overwritten
add_test!(overwrites_existing_file, async {
    let fixture = Fixture::with_file("data.bin", &[0x11; 4096]);

    let output = fixture
        .run_cargo("gen-file", &["-b", "0", "-s", "100"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    fixture.assert_constant("data.bin", 100, 0x00);
});
