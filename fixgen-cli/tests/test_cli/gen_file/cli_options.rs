use crate::add_test;
use crate::common::Fixture;

// Conflicting pattern options are rejected by argument parsing
add_test!(byte_and_sequence_conflict, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_cargo("gen-file", &["-b", "1", "-p", "0102"])
        .await;
    assert!(!output.status.success());
    assert!(!fixture.file_exists("data.bin"));
});

// Invalid pattern values are rejected
add_test!(invalid_pattern_values, async {
    let fixture = Fixture::new();

    for args in [
        ["-b", "256"],
        ["-b", "0xZZ"],
        ["-p", "123"],
        ["-p", "0x"],
        ["-s", "0"],
    ] {
        let output = fixture.run_cargo("gen-file", &args).await;
        assert!(!output.status.success(), "{args:?}");
    }
    assert!(!fixture.file_exists("data.bin"));
});

// A missing parent directory is reported with the program name
add_test!(missing_parent_directory, async {
    let fixture = Fixture::new();
    let path = fixture.path("missing/data.bin");

    let output = fixture.run_cargo("gen-file", &["-s", "16", &path]).await;
    assert!(!output.status.success());
    assert!(output.stderr.contains("gen-file: "), "{}", output.stderr);
    assert!(output.stderr.contains("missing/data.bin"), "{}", output.stderr);
    assert!(!fixture.file_exists("missing"));
});

// Verbose mode adds debug detail to the progress output
add_test!(verbose_output, async {
    let fixture = Fixture::new();

    let output = fixture
        .run_cargo("gen-file", &["-v", "-b", "0x55", "-s", "64"])
        .await;
    assert!(output.status.success(), "{}", output.stderr);
    assert!(output.stderr.contains("DEBUG"), "{}", output.stderr);
    assert!(output.stderr.contains("byte pattern 0x55"), "{}", output.stderr);
});
