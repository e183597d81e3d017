//! Golden parse vectors.
//!
//! Every vector must parse to exactly the document (or error) it lists, and
//! every successfully parsed vector must survive a save/load cycle once its
//! empty sections are discounted.

use inikit::{parse_reader, parse_str, render, Document, ParseOptions};
use inikit_testkit::vectors::{all_vectors, check_vector, Expected};

#[test]
fn test_all_vectors() {
    for vector in all_vectors() {
        if let Err(detail) = check_vector(&vector) {
            panic!("vector '{}' failed: {}", vector.name, detail);
        }
    }
}

#[test]
fn test_merged_vectors_round_trip() {
    for vector in all_vectors().into_iter().filter(|v| !v.legacy) {
        if !matches!(vector.expected, Expected::Sections(_)) {
            continue;
        }

        let doc = parse_reader(vector.input, &vector.options()).unwrap();
        let saved = render(&doc);
        let reloaded = parse_reader(saved.as_slice(), &ParseOptions::default()).unwrap();
        assert_eq!(reloaded.encoding(), doc.encoding(), "vector '{}'", vector.name);

        let non_empty: Vec<_> = doc.sections().filter(|s| !s.is_empty()).collect();
        let reloaded_sections: Vec<_> = reloaded.sections().collect();
        assert_eq!(non_empty, reloaded_sections, "vector '{}'", vector.name);
    }
}

#[test]
fn test_preserved_duplicates_render_verbatim() {
    let doc = parse_str("[a]\nk=1\nk=2\n[a]\nk=3\n", &ParseOptions::legacy()).unwrap();
    assert_eq!(doc.to_string(), "\n[a]\nk=1\nk=2\n\n[a]\nk=3\n");

    // Reloading with the default options folds the duplicates together.
    let merged: Document = doc.to_string().parse().unwrap();
    assert_eq!(merged.section_count(), 1);
    assert_eq!(merged.read("a", "k"), Some("3"));
}
