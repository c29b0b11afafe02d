use owo_colors::OwoColorize;

use crate::report::sarif::SarifDocument;

/// Print a per-run summary of a written SARIF document
pub fn render(doc: &SarifDocument, out_path: &std::path::Path) {
    println!();
    println!(
        "{}  SARIF {} — {}",
        "📄".bold(),
        doc.version.as_deref().unwrap_or("?"),
        out_path.display().dimmed()
    );

    if doc.runs.is_empty() {
        println!("   {}", "no runs".dimmed());
        println!();
        return;
    }

    for run in &doc.runs {
        let count = run.result_count();
        let count_display = if count == 0 {
            count.to_string().green().to_string()
        } else {
            count.to_string().yellow().bold().to_string()
        };
        let name = match run.tool_name() {
            "" => "(no tool)",
            name => name,
        };
        println!("   {:<24} {} results", name.bold(), count_display);
    }

    println!("{}", "━".repeat(40));
    println!(
        " {} runs, {} results",
        doc.runs.len().to_string().bold(),
        doc.result_count().to_string().bold()
    );
    println!();
}
