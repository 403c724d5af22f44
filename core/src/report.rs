use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::PipelineError;

/// Setter sammen én paginert rapport: tittelside fulgt av én side per
/// tilgjengelig diagram, fast bredde per bilde. Sloter uten bilde (den
/// peak-løse varianten) er eksplisitte `None`-oppføringer i inndata og
/// bidrar ikke med noen side. Bildene refereres relativt siden rapporten
/// ligger i samme resultatmappe.
pub fn assemble_report(
    chart_slots: &[Option<PathBuf>],
    test_name: &str,
    results_dir: &Path,
) -> Result<PathBuf, PipelineError> {
    let report_path = results_dir.join(format!("{}_results.html", test_name));

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", test_name));
    html.push_str("<style>\n");
    html.push_str("body { font-family: sans-serif; }\n");
    html.push_str(".page { page-break-after: always; text-align: center; padding-top: 30px; }\n");
    html.push_str(".page img { width: 90%; }\n");
    html.push_str(".title { margin-top: 40vh; }\n");
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str("<div class=\"page\"><h1 class=\"title\">Pupil Deviation Analysis Results</h1>");
    html.push_str(&format!("<p>{}</p></div>\n", test_name));

    for slot in chart_slots {
        if let Some(path) = slot {
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default();
            html.push_str(&format!(
                "<div class=\"page\"><img src=\"{}\" alt=\"{}\"></div>\n",
                file_name, file_name
            ));
        }
    }

    html.push_str("</body>\n</html>\n");

    fs::write(&report_path, html).map_err(|e| PipelineError::artifact(&report_path, e))?;
    Ok(report_path)
}
