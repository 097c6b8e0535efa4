use std::fs;

use doc_similarity::{
    compare_inputs, compare_paths, compare_texts, ComparisonReport, DocumentInput, DocumentSet, ExtractionPolicy,
    Metric, PairwiseComparator, ReportFormat, SimilarityConfig, SimilarityError,
};

fn config(workers: usize) -> SimilarityConfig {
    SimilarityConfig::default().with_workers(workers)
}

#[test]
fn identical_pair_scores_full_and_others_lower() {
    let table = compare_texts(&["the cat sat", "the cat sat", "a dog ran"], None, &config(2)).unwrap();
    assert_eq!(table.len(), 3);

    let first = table.get(0).unwrap();
    assert_eq!((first.doc1.as_str(), first.doc2.as_str()), ("Doc_1", "Doc_2"));
    for metric in Metric::ALL {
        assert_eq!(first.score(metric), 100.0, "{metric}");
    }
    assert_eq!(first.average, 100.0);

    // no shared token, so every metric bottoms out
    for r in table.iter().skip(1) {
        assert_eq!(r.doc2, "Doc_3");
        assert_eq!(r.scores(), [0.0; 6]);
        assert_eq!(r.average, 0.0);
    }
    assert_eq!(table.get(1).unwrap().doc1, "Doc_1");
    assert_eq!(table.get(2).unwrap().doc1, "Doc_2");
}

#[test]
fn worker_count_does_not_change_results() {
    let texts: Vec<String> = (0..9)
        .map(|i| format!("shared words in every text plus token{} and token{}", i, i % 3))
        .collect();
    let documents = DocumentSet::from_texts(&texts);
    let single = PairwiseComparator::new(&config(1)).unwrap().compare(&documents).unwrap();
    let many = PairwiseComparator::new(&config(8)).unwrap().compare(&documents).unwrap();
    assert_eq!(single.len(), 36);
    assert_eq!(single, many);
}

#[test]
fn document_count_boundaries() {
    let empty: [&str; 0] = [];
    assert!(matches!(
        compare_texts(&empty, None, &config(1)),
        Err(SimilarityError::InsufficientDocuments { found: 0 })
    ));
    assert!(matches!(
        compare_texts(&["lonely"], None, &config(1)),
        Err(SimilarityError::InsufficientDocuments { found: 1 })
    ));
    assert_eq!(compare_texts(&["a b", "c d"], None, &config(1)).unwrap().len(), 1);
}

#[test]
fn empty_documents_score_zero() {
    let table = compare_texts(&["", "!!!"], None, &config(1)).unwrap();
    let r = table.get(0).unwrap();
    assert_eq!(r.scores(), [0.0; 6]);
    assert_eq!(r.average, 0.0);
}

#[test]
fn files_from_disk_to_report() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "Rust makes systems programming safe.").unwrap();
    fs::write(&b, "rust makes SYSTEMS programming safe").unwrap();

    let inputs = vec![DocumentInput::from_path(&a).unwrap(), DocumentInput::from_path(&b).unwrap()];
    let (documents, table) = compare_inputs(&inputs, &config(2)).unwrap();
    assert_eq!(documents.labels(), vec!["a.txt", "b.txt"]);
    assert_eq!(table.get(0).unwrap().average, 100.0);

    let report = ComparisonReport::new(documents.labels(), table);
    let out = dir.path().join("report.cbor");
    report.write(ReportFormat::Cbor, fs::File::create(&out).unwrap()).unwrap();
    let decoded = ComparisonReport::from_cbor(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(decoded, report);
}

#[test]
fn unreadable_file_degrades_instead_of_aborting() {
    let dir = tempfile::tempdir().unwrap();
    let a = dir.path().join("a.txt");
    let b = dir.path().join("b.txt");
    fs::write(&a, "shared words here").unwrap();
    fs::write(&b, "shared words there").unwrap();
    let paths = vec![a, b, dir.path().join("missing.txt")];

    assert!(matches!(compare_paths(&paths, &config(2)), Err(SimilarityError::Extraction(_))));

    let degrade = config(2).with_extraction_policy(ExtractionPolicy::Degrade);
    let (documents, table) = compare_paths(&paths, &degrade).unwrap();
    assert_eq!(documents.labels(), vec!["a.txt", "b.txt", "missing.txt"]);
    assert_eq!(documents.degraded(), &["missing.txt".to_string()]);
    assert_eq!(table.len(), 3);
    assert!(table.get(0).unwrap().average > 0.0);
    assert_eq!(table.get(1).unwrap().average, 0.0);
}

#[test]
fn broken_pdf_fails_fast_or_degrades() {
    let inputs = vec![
        DocumentInput::from_label("broken.pdf", b"not a pdf".to_vec()),
        DocumentInput::from_label("a.txt", b"some words here".to_vec()),
        DocumentInput::from_label("b.txt", b"some words there".to_vec()),
    ];

    let err = compare_inputs(&inputs, &config(1)).unwrap_err();
    assert!(matches!(err, SimilarityError::Extraction(_)));

    let degrade = config(1).with_extraction_policy(ExtractionPolicy::Degrade);
    let (documents, table) = compare_inputs(&inputs, &degrade).unwrap();
    assert_eq!(documents.degraded(), &["broken.pdf".to_string()]);
    assert_eq!(table.len(), 3);
    assert_eq!(table.get(0).unwrap().average, 0.0);
    assert!(table.get(2).unwrap().average > 0.0);
}
