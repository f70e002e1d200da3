use mxl_tradepost::{Classification, DumpReport, RowTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        fn wrap(&self, code: &str, s: &str) -> String {
            if self.enabled { format!("{code}{s}{RESET}") } else { s.to_string() }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(color, s.as_ref())
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(BOLD, s.as_ref())
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(DIM, s.as_ref())
        }
    }
}

/// Print the verbose run report to stderr, keeping stdout for the post.
pub fn print_run(report: &DumpReport, color: bool) {
    let palette = ansi::Palette::new(color);
    let characters = report.characters.len() + report.skipped.len();
    eprintln!("\n{}", palette.bold(palette.paint(format!("⚙  Dump: {characters} characters"), ansi::CYAN)));

    eprintln!("\n{}", palette.paint("━━━ Characters ━━━", ansi::GRAY));
    print_characters(report, &palette);

    eprintln!("\n{}", palette.paint("━━━ Rule hits ━━━", ansi::GRAY));
    if report.metrics.rule_hits.is_empty() {
        eprintln!("{}", palette.dim("  No rows classified"));
    }
    for (rule, hits) in &report.metrics.rule_hits {
        eprintln!("  {:>6}  {}", palette.paint(hits.to_string(), ansi::YELLOW), palette.paint(*rule, ansi::BLUE));
    }

    if !report.trace.is_empty() {
        eprintln!("\n{}", palette.paint("━━━ Rows ━━━", ansi::GRAY));
        for row in &report.trace {
            eprintln!("  {}", fmt_row(row, &palette));
        }
    }

    if !report.warnings.is_empty() {
        eprintln!("\n{}", palette.paint("━━━ Warnings ━━━", ansi::GRAY));
        for warning in &report.warnings {
            eprintln!("  {} {}", palette.paint("!", ansi::RED), warning);
        }
    }

    eprintln!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    eprintln!(
        "  Total: {}  │  Classify: {}  │  Rows: {}",
        palette.paint(format!("{:?}", report.elapsed), ansi::GREEN),
        palette.paint(format!("{:?}", report.metrics.total), ansi::CYAN),
        palette.dim(report.metrics.rows.to_string()),
    );
    eprintln!();
}

fn print_characters(report: &DumpReport, palette: &ansi::Palette) {
    for summary in &report.characters {
        eprintln!(
            "  {} {} {} {} {}",
            palette.bold(&summary.character),
            palette.dim(format!("rows {}", summary.rows)),
            palette.paint(format!("✓ {}", summary.counted), ansi::GREEN),
            palette.dim(format!("– {}", summary.discarded)),
            if summary.failed > 0 {
                palette.paint(format!("✗ {}", summary.failed), ansi::RED)
            } else {
                palette.dim("✗ 0")
            }
        );
    }
    for skipped in &report.skipped {
        eprintln!(
            "  {} {}",
            palette.bold(&skipped.character),
            palette.paint(format!("skipped: {}", skipped.reason), ansi::YELLOW)
        );
    }
}

fn fmt_row(row: &RowTrace, palette: &ansi::Palette) -> String {
    let outcome = match &row.outcome {
        Ok(Classification::Discard) => palette.dim("discarded"),
        Ok(Classification::Count(entry)) => {
            let name = match &entry.set {
                Some(set) => format!("{set} / {}", entry.name),
                None => entry.name.clone(),
            };
            palette.paint(format!("{} {name} x{}", entry.category.name(), entry.amount), ansi::GREEN)
        }
        Err(message) => palette.paint(message, ansi::RED),
    };
    format!(
        "{} {:?} {} {}  {} {}",
        palette.dim(&row.character),
        row.label,
        palette.dim("→"),
        outcome,
        palette.dim("rule:"),
        palette.paint(row.rule, ansi::CYAN)
    )
}
