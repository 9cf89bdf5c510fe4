use crate::add_test;
use crate::common::{Fixture, FIXTURE_NAMES};
use crate::KB;

// Running twice over an existing directory succeeds and overwrites
add_test!(rerun_overwrites_existing_files, async {
    let fixture = Fixture::new();

    let output = fixture.run_cargo("gen-data", &["-s", "8K"]).await;
    assert!(output.status.success(), "{}", output.stderr);

    let output = fixture.run_cargo("gen-data", &["-s", "2K"]).await;
    assert!(output.status.success(), "{}", output.stderr);

    for name in FIXTURE_NAMES {
        assert_eq!(fixture.read(&format!("data/{name}")).len(), 2 * KB, "{name}");
    }
    fixture.assert_constant("data/data_pattern_aa.bin", 2 * KB, 0xAA);
});

// A regular file in place of the output directory is an error
add_test!(output_dir_is_a_file, async {
    let fixture = Fixture::with_file("data", b"occupied");

    let output = fixture.run_cargo("gen-data", &["-s", "1K"]).await;
    assert_eq!(output.status.code(), Some(1), "{}", output.stderr);
    assert!(output.stderr.contains("gen-data: "), "{}", output.stderr);
    assert!(output.stderr.contains("Not a directory"), "{}", output.stderr);
});

// -qq suppresses the error message but keeps the exit status
add_test!(double_quiet_suppresses_errors, async {
    let fixture = Fixture::with_file("data", b"occupied");

    let output = fixture.run_cargo("gen-data", &["-qq"]).await;
    assert!(!output.status.success());
    assert!(output.stderr.is_empty(), "{}", output.stderr);
});

// Zero and malformed sizes are rejected without writing anything
add_test!(invalid_size_rejected, async {
    let fixture = Fixture::new();

    for size in ["0", "1X", "abc", "+4K"] {
        let output = fixture.run_cargo("gen-data", &["-s", size]).await;
        assert_eq!(output.status.code(), Some(2), "size {size}: {}", output.stderr);
    }
    assert!(!fixture.file_exists("data"));
    assert!(fixture.root_dir_path().read_dir().unwrap().next().is_none());
});
