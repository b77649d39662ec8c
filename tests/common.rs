use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::TempDir;
use webhook_tester::logger::report_logger::ReportLogger;
use webhook_tester::workers::webhook_tester::{TestRun, WebhookTester};

pub const PLACEHOLDER_PAGE: &str = r#"<!DOCTYPE html>
<html lang="es">
<body>
  <form id="contact-form" data-webhook-url="YOUR_N8N_WEBHOOK_URL_HERE" method="post">
    <input name="nombre">
  </form>
</body>
</html>
"#;

pub fn page_for(url: &str) -> String {
    PLACEHOLDER_PAGE.replace("YOUR_N8N_WEBHOOK_URL_HERE", url)
}

/// Writes `content` as `index.html` in a fresh directory.
pub fn html_fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("index.html");
    fs::write(&path, content).expect("write fixture");
    (dir, path)
}

pub async fn run_tester(html_path: &Path, timeout: Duration) -> (TestRun, String) {
    let tester = WebhookTester::new(html_path, timeout);
    let mut logger = ReportLogger::new(Vec::new());

    let run = tester.run(&mut logger).await.expect("console write");
    let output = String::from_utf8(logger.into_inner()).expect("utf-8 output");

    (run, output)
}
