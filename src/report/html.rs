use std::fmt::Write;

use crate::{compare::aggregate::PairResult, metrics::Metric};

const STYLE: &str = "\
body { font-family: Arial, sans-serif; margin: 20px; }
h1 { color: #2c3e50; }
.summary { background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin-bottom: 20px; }
table { border-collapse: collapse; width: 100%; margin-bottom: 20px; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
th { background-color: #3498db; color: white; }
tr:nth-child(even) { background-color: #f2f2f2; }
.average { font-weight: bold; }
";

/// 各指標の説明
fn describe(metric: Metric) -> &'static str {
    match metric {
        Metric::CosineTfidf => "Cosine of TF-IDF weighted term vectors, favouring distinctive words",
        Metric::CosineCount => "Cosine of raw term count vectors",
        Metric::Jaccard => "Shared distinct words over all distinct words",
        Metric::Lcs => "Longest common token subsequence relative to the longer document",
        Metric::Lsh => "MinHash estimate of word shingle overlap",
        Metric::NGram => "Shared word n-grams over all distinct n-grams",
    }
}

/// Render a standalone HTML report
///
/// # Arguments
/// * `results` - pair results in canonical order
/// * `file_names` - labels of the compared documents
/// * `generated_at` - timestamp shown in the summary
pub fn render(results: &[PairResult], file_names: &[String], generated_at: &str) -> String {
    let mut out = String::with_capacity(4096 + results.len() * 256);
    // String への write! は失敗しない
    let _ = write_document(&mut out, results, file_names, generated_at);
    out
}

fn write_document(
    out: &mut String,
    results: &[PairResult],
    file_names: &[String],
    generated_at: &str,
) -> std::fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">")?;
    writeln!(out, "<title>Document Similarity Report</title>")?;
    writeln!(out, "<style>\n{STYLE}</style>\n</head>\n<body>")?;
    writeln!(out, "<h1>Document Similarity Report</h1>")?;

    writeln!(out, "<div class=\"summary\">")?;
    writeln!(out, "<p><strong>Generated:</strong> {}</p>", escape(generated_at))?;
    writeln!(out, "<p><strong>Documents compared:</strong> {}</p>", file_names.len())?;
    let names: Vec<String> = file_names.iter().map(|n| escape(n)).collect();
    writeln!(out, "<p><strong>Files:</strong> {}</p>", names.join(", "))?;
    writeln!(out, "</div>")?;

    writeln!(out, "<h2>Results</h2>\n<table>\n<tr>")?;
    write!(out, "<th>Doc 1</th><th>Doc 2</th>")?;
    for metric in Metric::ALL {
        write!(out, "<th>{}</th>", metric.column_name())?;
    }
    writeln!(out, "<th>Average Similarity (%)</th>\n</tr>")?;
    for r in results {
        write!(out, "<tr><td>{}</td><td>{}</td>", escape(&r.doc1), escape(&r.doc2))?;
        for score in r.scores() {
            write!(out, "<td>{score:.2}%</td>")?;
        }
        writeln!(out, "<td class=\"average\">{:.2}%</td></tr>", r.average)?;
    }
    writeln!(out, "</table>")?;

    writeln!(out, "<h2>Metrics</h2>\n<table>\n<tr><th>Metric</th><th>Description</th></tr>")?;
    for metric in Metric::ALL {
        writeln!(out, "<tr><td>{}</td><td>{}</td></tr>", metric.column_name(), describe(metric))?;
    }
    writeln!(out, "</table>\n</body>\n</html>")
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(doc1: &str, doc2: &str) -> PairResult {
        PairResult {
            doc1: doc1.into(),
            doc2: doc2.into(),
            cosine_tfidf: 100.0,
            cosine_count: 100.0,
            jaccard: 50.0,
            lcs: 25.5,
            lsh: 0.0,
            ngram: 10.0,
            average: 47.58,
        }
    }

    #[test]
    fn contains_summary_and_rows() {
        let names = vec!["a.pdf".to_string(), "b.pdf".to_string()];
        let html = render(&[result("a.pdf", "b.pdf")], &names, "2026-01-02 03:04:05");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("2026-01-02 03:04:05"));
        assert!(html.contains("<strong>Documents compared:</strong> 2"));
        assert!(html.contains("<td>a.pdf</td><td>b.pdf</td>"));
        assert!(html.contains("<td>25.50%</td>"));
        assert!(html.contains("<td class=\"average\">47.58%</td>"));
        for metric in Metric::ALL {
            assert!(html.contains(&format!("<th>{}</th>", metric.column_name())));
        }
    }

    #[test]
    fn labels_are_escaped() {
        let names = vec!["<script>.txt".to_string(), "a&b.txt".to_string()];
        let html = render(&[result("<script>.txt", "a&b.txt")], &names, "now");
        assert!(!html.contains("<script>.txt"));
        assert!(html.contains("&lt;script&gt;.txt"));
        assert!(html.contains("a&amp;b.txt"));
    }

    #[test]
    fn empty_results_still_render() {
        let html = render(&[], &[], "now");
        assert!(html.contains("<strong>Documents compared:</strong> 0"));
        assert!(html.ends_with("</html>\n"));
    }
}
