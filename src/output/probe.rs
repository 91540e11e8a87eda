//! Candidate survey output
//!
//! The probe command evaluates every source instead of stopping at the
//! first match, so a user can see exactly why a directory was or was not
//! picked.

use comfy_table::{
    Cell, ContentArrangement, Table, modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::core::{Candidate, ResolutionResult, Strategy};

pub(crate) struct ProbeReport<'a> {
    pub(crate) strategy: Strategy,
    pub(crate) candidates: &'a [Candidate],
    pub(crate) selected: Option<&'a ResolutionResult>,
    pub(crate) terminal_name: Option<String>,
    pub(crate) terminal_pid: Option<u32>,
}

fn terminal_line(report: &ProbeReport<'_>) -> String {
    match (&report.terminal_name, report.terminal_pid) {
        (Some(name), Some(pid)) => format!("Terminal: {name} (pid {pid})"),
        (Some(name), None) => format!("Terminal: {name}"),
        _ => "Terminal: none".to_string(),
    }
}

pub(crate) fn print_probe_table(report: &ProbeReport<'_>) {
    println!("Strategy: {}", report.strategy);
    println!("{}", terminal_line(report));

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Source", "Path", "Folder", "Picked"]);

    for (idx, candidate) in report.candidates.iter().enumerate() {
        let picked = report
            .selected
            .is_some_and(|s| s.source == candidate.source);
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(candidate.source.label()),
            Cell::new(
                candidate
                    .path
                    .as_ref()
                    .map_or("-".to_string(), |p| p.display().to_string()),
            ),
            Cell::new(candidate.folder.as_deref().unwrap_or("-")),
            Cell::new(if picked { "✔" } else { "" }),
        ]);
    }

    println!("{table}");

    match report.selected {
        Some(s) => println!("Would rename to \"{}\" ({})", s.folder, s.source),
        None => println!("No candidate produced a usable folder name"),
    }
}

pub(crate) fn output_probe_json(report: &ProbeReport<'_>) {
    let candidates: Vec<serde_json::Value> = report
        .candidates
        .iter()
        .enumerate()
        .map(|(idx, candidate)| {
            serde_json::json!({
                "priority": idx + 1,
                "source": candidate.source,
                "path": candidate.path.as_ref().map(|p| p.display().to_string()),
                "folder": candidate.folder,
                "selected": report.selected.is_some_and(|s| s.source == candidate.source),
            })
        })
        .collect();

    let output = serde_json::json!({
        "strategy": report.strategy,
        "terminal": report.terminal_name.as_ref().map(|name| {
            serde_json::json!({ "name": name, "pid": report.terminal_pid })
        }),
        "candidates": candidates,
        "selected": report.selected.map(|s| {
            serde_json::json!({
                "path": s.path.display().to_string(),
                "source": s.source,
                "folder": s.folder,
            })
        }),
    });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ContextSnapshot, CwdHint, resolve, survey};
    use std::path::PathBuf;

    #[test]
    fn terminal_line_variants() {
        let ctx = ContextSnapshot {
            process_cwd: PathBuf::from("/var/tmp/build7"),
            ..Default::default()
        };
        let candidates = survey(Strategy::Terminal, &ctx);
        let mut report = ProbeReport {
            strategy: Strategy::Terminal,
            candidates: &candidates,
            selected: None,
            terminal_name: Some("zsh".to_string()),
            terminal_pid: Some(77),
        };
        assert_eq!(terminal_line(&report), "Terminal: zsh (pid 77)");
        report.terminal_pid = None;
        assert_eq!(terminal_line(&report), "Terminal: zsh");
        report.terminal_name = None;
        assert_eq!(terminal_line(&report), "Terminal: none");
    }

    #[test]
    fn selected_marker_follows_resolution() {
        let ctx = ContextSnapshot {
            terminal_cwd: Some(CwdHint::Text("/home/alice/project-x".to_string())),
            process_cwd: PathBuf::from("/var/tmp/build7"),
            ..Default::default()
        };
        let candidates = survey(Strategy::Terminal, &ctx);
        let selected = resolve(Strategy::Terminal, &ctx);
        let report = ProbeReport {
            strategy: Strategy::Terminal,
            candidates: &candidates,
            selected: selected.as_ref(),
            terminal_name: Some("zsh".to_string()),
            terminal_pid: None,
        };
        let picked: Vec<bool> = report
            .candidates
            .iter()
            .map(|c| report.selected.is_some_and(|s| s.source == c.source))
            .collect();
        assert_eq!(picked, [true, false, false, false]);
    }
}
