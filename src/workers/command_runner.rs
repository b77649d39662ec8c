use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::{timeout_duration_secs, HTML_FILES};
use crate::enums::commands::Commands;
use crate::errors::{TesterError, TesterResult};
use crate::logger::report_logger::ReportLogger;
use crate::structs::config::webhook_config::WebhookConfig;
use crate::workers::webhook_tester::WebhookTester;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self {
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> TesterResult<()> {
        self.start_time = Some(Instant::now());
        let mut out = io::stdout();

        let result = match command {
            Commands::Test { html, timeout } => self.test_command(&html, timeout, &mut out).await,
            Commands::Configure { url, static_dir, config } => {
                self.configure_command(&url, &static_dir, &config, &mut out).map(|_| ())
            }
            Commands::Build { static_dir, config } => {
                self.build_command(&static_dir, &config, &mut out).map(|_| ())
            }
        };

        if let Some(start) = self.start_time {
            log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    /// Only a failing console can make this an error.
    pub async fn test_command<W: Write>(&self, html: &Path, timeout_secs: u64, out: &mut W) -> TesterResult<()> {
        let tester = WebhookTester::new(html, timeout_duration_secs(timeout_secs));
        let mut logger = ReportLogger::new(out);

        let run = tester.run(&mut logger).await?;
        log::debug!("Test run finished: request sent = {}", run.request_sent());

        Ok(())
    }

    /// Returns the number of HTML pages rewritten. An invalid URL is reported
    /// and leaves everything untouched (0 pages).
    pub fn configure_command<W: Write>(&self, url: &str, static_dir: &Path, config_path: &Path, out: &mut W) -> TesterResult<usize> {
        writeln!(out, "🔧 SAI Website Webhook Configuration Tool")?;
        writeln!(out, "{}", "=".repeat(42))?;
        writeln!(out)?;

        if let Err(e) = ConfigManager::validate_webhook_url(url) {
            log::debug!("Rejected webhook URL: {}", e);
            writeln!(out, "{}", e.user_message())?;
            return Ok(0);
        }

        writeln!(out, "🔗 Configuring webhook URL: {}", url)?;
        writeln!(out)?;

        let config = WebhookConfig::new(url);
        if let Err(e) = ConfigManager::save(config_path, &config) {
            writeln!(out, "❌ Error updating config: {}", e)?;
            return Err(e);
        }
        writeln!(out, "✅ Updated {}", config_path.display())?;

        let updated = Self::update_html_files(static_dir, &config, out)?;

        writeln!(out)?;
        if updated > 0 {
            writeln!(out, "🎉 Webhook configuration complete!")?;
            writeln!(out, "📊 Updated {} HTML files + config file", updated)?;
        } else {
            writeln!(out, "❌ No HTML files were updated. Check if files exist.")?;
        }

        Ok(updated)
    }

    /// Returns the number of HTML pages rewritten.
    pub fn build_command<W: Write>(&self, static_dir: &Path, config_path: &Path, out: &mut W) -> TesterResult<usize> {
        writeln!(out, "🔧 SAI Website Configuration Builder")?;
        writeln!(out, "{}", "=".repeat(36))?;
        writeln!(out)?;

        writeln!(out, "📋 Loading config from: {}", config_path.display())?;
        let mut config = match ConfigManager::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                writeln!(out, "❌ Error loading config: {}", e)?;
                return Err(e);
            }
        };
        config.webhook.url = config.webhook.url.trim().to_string();

        if config.webhook.url.is_empty() {
            writeln!(out, "❌ No webhook URL found in config")?;
            return Err(TesterError::not_configured(&config_path.display().to_string()));
        }

        log::debug!("Configured timeout {:?}, retries {}", config.timeout(), config.webhook.retries);
        writeln!(out, "🔗 Using webhook URL: {}", config.webhook.url)?;
        if config.auth_key().is_some() {
            writeln!(out, "🔑 Injecting API key")?;
        }
        if config.security.is_some() {
            writeln!(out, "🛡️  Injecting security flags")?;
        }
        writeln!(out)?;

        let updated = Self::update_html_files(static_dir, &config, out)?;

        writeln!(out)?;
        if updated > 0 {
            writeln!(out, "🎉 Configuration build complete!")?;
            writeln!(out, "📊 Updated {} files", updated)?;
        } else {
            writeln!(out, "❌ No files were updated")?;
        }

        Ok(updated)
    }

    fn update_html_files<W: Write>(static_dir: &Path, config: &WebhookConfig, out: &mut W) -> TesterResult<usize> {
        let mut success_count = 0;

        for filename in HTML_FILES {
            let file_path = static_dir.join(filename);

            if !file_path.exists() {
                writeln!(out, "❌ File not found: {}", filename)?;
                continue;
            }

            match ConfigManager::update_html_file(&file_path, config) {
                Ok(true) => {
                    writeln!(out, "✅ Updated {}", filename)?;
                    success_count += 1;
                }
                Ok(false) => writeln!(out, "⚠️  No webhook URL found in {}", filename)?,
                Err(e) => {
                    log::error!("Failed to update {}: {}", file_path.display(), e);
                    writeln!(out, "❌ Error updating {}: {}", filename, e)?;
                }
            }
        }

        Ok(success_count)
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedConsole;

    impl Write for ClosedConsole {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "Broken pipe"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn console_failure_is_not_a_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("index.html");

        let result = CommandRunner::new().test_command(&html, 1, &mut ClosedConsole).await;

        match result {
            Err(e @ TesterError::ConsoleError { .. }) => {
                assert!(e.user_message().contains("Could not write to the console"));
            }
            other => panic!("expected console error, got {:?}", other),
        }
    }

    #[test]
    fn configure_reports_console_failure() {
        let dir = tempfile::tempdir().unwrap();

        let result = CommandRunner::new().configure_command(
            "https://n8n.example.com/webhook/1",
            dir.path(),
            &dir.path().join("webhook.json"),
            &mut ClosedConsole,
        );

        assert!(matches!(result, Err(TesterError::ConsoleError { .. })));
        assert!(!dir.path().join("webhook.json").exists());
    }
}
