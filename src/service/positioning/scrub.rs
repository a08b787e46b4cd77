//! Light post-processing for prose replies
//!
//! Prompts ask for plain text, but models still slip in markdown emphasis,
//! headings, and bullet markers. This scrub keeps line structure (the UVP
//! reply is three newline-separated sentences) while removing formatting.

/// Strip markdown decoration and normalize whitespace, keeping line breaks
pub fn scrub(text: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for line in text.lines() {
        let line = strip_line_prefix(line.trim());
        let line: String = line.chars().filter(|c| !matches!(c, '*' | '`')).collect();
        let line = line.split_whitespace().collect::<Vec<_>>().join(" ");
        lines.push(line);
    }

    // Collapse runs of blank lines to a single one
    let mut out: Vec<&str> = Vec::new();
    let mut last_blank = true;
    for line in &lines {
        if line.is_empty() {
            if !last_blank {
                out.push("");
            }
            last_blank = true;
        } else {
            out.push(line);
            last_blank = false;
        }
    }
    while out.last() == Some(&"") {
        out.pop();
    }

    out.join("\n")
}

/// Remove heading hashes, bullet markers, and list numbering at line start
fn strip_line_prefix(line: &str) -> &str {
    let line = line.trim_start_matches('#').trim_start();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or(line);

    // "1. ", "2) " style numbering
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(stripped) = rest.strip_prefix(". ").or_else(|| rest.strip_prefix(") ")) {
            return stripped;
        }
    }

    line
}
