use crate::add_test;
use crate::common::{Fixture, COUNTER, FIXTURE_NAMES};
use crate::{KB, MB};

// Without options the reference set is written into ./data
add_test!(default_fixture_set, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("gen-data", &[]).await;
    assert!(output.status.success(), "{}", output.stderr);

    for name in FIXTURE_NAMES {
        let data = fixture.read(&format!("data/{name}"));
        assert_eq!(data.len(), 2 * MB, "{name}");
    }

    fixture.assert_constant("data/data_zeros.bin", 2 * MB, 0x00);
    fixture.assert_constant("data/data_ones.bin", 2 * MB, 0xFF);
    fixture.assert_constant("data/data_pattern_55.bin", 2 * MB, 0x55);
    fixture.assert_constant("data/data_pattern_aa.bin", 2 * MB, 0xAA);
    fixture.assert_sequence("data/data_pattern_seq_0123.bin", 2 * MB, &COUNTER);
});

// Custom directory and size
add_test!(custom_directory_and_size, async {
    let fixture = Fixture::new();
    let dir = fixture.path("out/fixtures");

    let output = fixture
        .run_cargo("gen-data", &["-C", &dir, "--size", "4K"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);

    assert!(!fixture.file_exists("data"));
    fixture.assert_constant("out/fixtures/data_zeros.bin", 4 * KB, 0x00);
    fixture.assert_sequence("out/fixtures/data_pattern_seq_0123.bin", 4 * KB, &COUNTER);
    assert_eq!(fixture.read("out/fixtures/data_random.bin").len(), 4 * KB);
});

// Progress is reported on stderr, stdout stays clean
add_test!(progress_on_stderr, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("gen-data", &["-s", "1K"]).await;
    assert!(output.status.success());

    assert!(output.stdout.is_empty());
    assert!(output.stderr.contains("data_pattern_55.bin"), "{}", output.stderr);
    assert!(output.stderr.contains("byte pattern 0x55"), "{}", output.stderr);
    assert!(output.stderr.contains("Created"), "{}", output.stderr);
});

// Quiet mode suppresses progress
add_test!(quiet_suppresses_progress, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("gen-data", &["-q", "-s", "1K"]).await;
    assert!(output.status.success());
    assert!(output.stderr.is_empty(), "{}", output.stderr);
    assert!(fixture.file_exists("data/data_ones.bin"));
});
