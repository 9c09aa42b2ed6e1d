use codetidy_engine::{BlockPatterns, sort_components_file, sort_document};

#[test]
fn fixture_leptos_views() {
    assert_fixture("leptos_views");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/{name}.rs")).unwrap();

    let sorted = sort_document(&source, &BlockPatterns::default());

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, sorted.render());
    });
}

/// Sorting the sorted output again changes nothing
#[test]
fn sorted_fixture_is_stable() {
    let fixtures_dir = format!("{}/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let source = std::fs::read_to_string(format!("{fixtures_dir}/leptos_views.rs")).unwrap();
    let patterns = BlockPatterns::default();

    let once = sort_document(&source, &patterns);
    let twice = sort_document(&once.render(), &patterns);

    assert_eq!(once, twice);
}

/// End to end through the filesystem: zeta, alpha, mid -> alpha, mid, zeta
#[test]
fn sort_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("src").join("pages");
    std::fs::create_dir_all(&nested).unwrap();
    let input = nested.join("views.rs");
    let names = ["zeta", "alpha", "mid"];
    let content: String = names
        .iter()
        .map(|name| {
            format!("#[component]\npub fn {name}() -> impl IntoView {{\n    view! {{ <p/> }}\n}}\n\n")
        })
        .collect();
    std::fs::write(&input, content).unwrap();

    let report = sort_components_file(&input, &BlockPatterns::default()).unwrap();

    assert_eq!(report.output_path, nested.join("sorted_views.rs"));
    let output = std::fs::read_to_string(&report.output_path).unwrap();
    let order: Vec<usize> = ["alpha", "mid", "zeta"]
        .iter()
        .map(|name| output.find(&format!("pub fn {name}()")).unwrap())
        .collect();
    assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(!output.ends_with('\n'));
}
