use colored::Colorize;
use hoptrace_core::{ErrorKind, ResolutionOutcome, TraceResult};

/// ANSI sequence that clears the screen and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

const LABEL_WIDTH: usize = 15;
const TABLE_MARGIN: &str = "  ";
// Margin plus the hop and status columns.
const TABLE_URL_COLUMN: usize = 17;
const DIVIDER_EXTRA: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Json,
    /// Only the clean URL.
    Terse,
    /// Final and clean URL.
    Short,
    /// Every hop in a table, then the summary.
    Verbose,
}

impl ViewMode {
    pub fn clears_screen(self) -> bool {
        matches!(self, ViewMode::Short | ViewMode::Verbose)
    }
}

#[derive(Debug, Clone, Copy)]
enum Style {
    Heading,
    Clean,
    HopNumber,
}

#[derive(Debug, Clone)]
pub struct Renderer {
    mode: ViewMode,
    width: usize,
    color: bool,
}

impl Renderer {
    pub fn new(mode: ViewMode, width: usize, color: bool) -> Self {
        Self {
            mode,
            width: width.max(1),
            color,
        }
    }

    pub fn render(&self, outcome: &ResolutionOutcome) -> Result<String, serde_json::Error> {
        match outcome {
            ResolutionOutcome::Success(result) => self.render_result(result, false),
            ResolutionOutcome::LoopDetected(result) => self.render_result(result, true),
            ResolutionOutcome::Blocked => {
                self.render_message("Cloudflare protection prevents tracing. Sorry!")
            }
            ResolutionOutcome::Failed { kind, message } => {
                self.render_message(&failure_message(*kind, message))
            }
        }
    }

    fn render_result(&self, result: &TraceResult, looped: bool) -> Result<String, serde_json::Error> {
        let mut out = match self.mode {
            ViewMode::Json => {
                let mut json = serde_json::to_string_pretty(result)?;
                json.push('\n');
                return Ok(json);
            }
            ViewMode::Terse => format!("{}\n", result.clean_url),
            ViewMode::Short => self.summary(result, ""),
            ViewMode::Verbose => self.table(result),
        };
        if looped && self.mode != ViewMode::Terse {
            out.push_str("\nRedirect loop detected.\n");
        }
        Ok(out)
    }

    fn render_message(&self, message: &str) -> Result<String, serde_json::Error> {
        if self.mode == ViewMode::Json {
            let mut json = serde_json::to_string_pretty(&serde_json::json!({ "error": message }))?;
            json.push('\n');
            return Ok(json);
        }
        Ok(format!("\n{message}\n"))
    }

    fn summary(&self, result: &TraceResult, margin: &str) -> String {
        let indent = margin.len() + LABEL_WIDTH;
        let mut out = format!(
            "\n{margin}{}:     {}\n",
            self.paint("Final URL", Style::Heading),
            wrap_url(&result.final_url, self.width, indent)
        );
        if result.has_tracking_query() {
            out.push_str(&format!(
                "\n{margin}{}:     {}\n",
                self.paint("Clean URL", Style::Clean),
                wrap_url(&result.clean_url, self.width, indent)
            ));
        }
        out
    }

    fn table(&self, result: &TraceResult) -> String {
        let divider_width = if result.final_url.chars().count() <= self.width {
            result.final_url.chars().count() + DIVIDER_EXTRA
        } else {
            self.width + DIVIDER_EXTRA
        };
        let divider = format!("{TABLE_MARGIN}{}\n", "-".repeat(divider_width));

        let mut out = format!(
            "\n{TABLE_MARGIN}{} | {} | {}\n",
            self.paint("Hop", Style::Heading),
            self.paint("Status", Style::Heading),
            self.paint("URL", Style::Heading)
        );
        out.push_str(&divider);
        for hop in &result.hops {
            out.push_str(&format!(
                "{TABLE_MARGIN}{} | {:<6} | {}\n",
                self.paint(&format!("{:<3}", hop.number), Style::HopNumber),
                hop.status_code,
                wrap_url(&hop.url, self.width, TABLE_URL_COLUMN)
            ));
            out.push_str(&divider);
        }
        out.push_str(&self.summary(result, TABLE_MARGIN));
        out.push_str(&divider);
        out
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if !self.color {
            return text.to_string();
        }
        match style {
            Style::Heading => text.blue().bold().to_string(),
            Style::Clean => text.green().to_string(),
            Style::HopNumber => text.bright_cyan().to_string(),
        }
    }
}

fn failure_message(kind: ErrorKind, message: &str) -> String {
    match kind {
        ErrorKind::Timeout => "The request timed out. Sorry!".to_string(),
        ErrorKind::CertificateValidation => {
            "There was a certificate validation error. Sorry!".to_string()
        }
        ErrorKind::ConnectionRefused => {
            "The connection was refused (possibly because of DNS). Sorry!".to_string()
        }
        _ => format!("Error tracing URL: {kind}: {message}"),
    }
}

/// Breaks `url` into `width`-character lines, indenting continuation lines.
pub fn wrap_url(url: &str, width: usize, indent: usize) -> String {
    if width == 0 || url.chars().count() <= width {
        return url.to_string();
    }
    let separator = format!("\n{}", " ".repeat(indent));
    url.chars()
        .collect::<Vec<_>>()
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(&separator)
}
