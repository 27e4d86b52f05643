use colored::Colorize;

use super::OutputFormatter;
use crate::colors::CatppuccinExt;
use crate::status::{CheckReport, SiteStatus, StatusResponse};

pub struct HumanFormatter {
    use_colors: bool,
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    fn label(&self, text: &str) -> String {
        if self.use_colors {
            text.sky().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn value(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_white().to_string()
        } else {
            text.to_string()
        }
    }

    fn success(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warning(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn error(&self, text: &str) -> String {
        if self.use_colors {
            text.ctp_red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.use_colors {
            text.overlay1().to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, text: &str) -> String {
        if self.use_colors {
            format!("\n{}\n{}", text.lavender().bold(), "─".repeat(text.len()).subtext0())
        } else {
            format!("\n{}\n{}", text, "-".repeat(text.len()))
        }
    }

    fn diagnostics(&self, response: &StatusResponse) -> String {
        let mut output = Vec::new();

        output.push(self.header(&format!("Status: {}", response.domain)));

        let status = response.status();
        let status_display = match status {
            SiteStatus::Up => self.success(&status.to_string()),
            SiteStatus::Down => self.error(&status.to_string()),
            SiteStatus::InvalidDomain | SiteStatus::Unknown(_) => {
                self.warning(&status.to_string())
            }
        };
        output.push(format!(
            "  {}: {} {}",
            self.label("Status"),
            status_display,
            self.dim(&format!("(code {})", response.status_code))
        ));

        let fields = [
            ("Domain", response.domain.clone()),
            ("Port", response.port.to_string()),
            ("Response IP", response.response_ip.clone()),
            ("Response Code", response.response_code.to_string()),
            ("Response Time", format!("{:.3}s", response.response_time)),
        ];
        for (name, value) in fields {
            output.push(format!("  {}: {}", self.label(name), self.value(&value)));
        }

        output.join("\n")
    }
}

impl OutputFormatter for HumanFormatter {
    // The verdict line stays uncoloured: scripts match on it.
    fn format_report(&self, report: &CheckReport, verbose: bool) -> String {
        let verdict = if report.up { "up" } else { "down" };
        let mut output = vec![format!("Site {} is {}", report.host, verdict)];

        if !verbose {
            return output.join("\n");
        }

        if let Some(ref response) = report.response {
            output.push(self.diagnostics(response));
        }

        if let Some(ref error) = report.error {
            output.push(format!("  {}: {}", self.label("Check failed"), self.error(error)));
        }

        output.push(format!(
            "  {}",
            self.dim(&format!(
                "checked at {}",
                report.checked_at.format("%Y-%m-%d %H:%M:%S UTC")
            ))
        ));

        output.join("\n")
    }
}
