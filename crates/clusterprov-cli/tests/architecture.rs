use arch_lint::rules::{NoErrorSwallowing, NoSilentResultDrop};
use arch_lint::{Analyzer, Severity};
use std::path::{Path, PathBuf};

const MEMBERS: [&str; 3] = ["clusterprov-core", "clusterprov-cloud", "clusterprov-cli"];

fn member_sources() -> Vec<PathBuf> {
    let crates_dir = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("crates directory");

    MEMBERS
        .iter()
        .map(|member| crates_dir.join(member).join("src"))
        .collect()
}

/// Every failed command and unparseable output must surface as an
/// `AdapterError` or `anyhow` error, so no member's library or binary source
/// may swallow errors (AL003) or drop results into fallbacks (AL013).
#[test]
fn member_sources_propagate_errors() {
    let mut reports = Vec::new();

    for src in member_sources() {
        assert!(src.is_dir(), "missing source dir {}", src.display());

        let analyzer = Analyzer::builder()
            .root(src.as_path())
            .rule(NoErrorSwallowing::new())
            .rule(NoSilentResultDrop::new())
            .build()
            .expect("build analyzer");

        let result = analyzer.analyze().expect("analyze");

        if result.has_violations_at(Severity::Warning) {
            reports.push(format!(
                "{}:\n{}",
                src.display(),
                result.format_test_report(Severity::Warning)
            ));
        }
    }

    assert!(reports.is_empty(), "{}", reports.join("\n"));
}
