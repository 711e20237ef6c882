use postmatch_engine::AnalysisResult;

/// Render one analysis as a plain-text block for the terminal.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "=== Match {} — {} ({})\n",
        result.match_id, result.hero_name, result.result_text
    ));
    out.push_str(&format!(
        "Role: {}{}  Pick: {} (#{})\n",
        role_label(result.lane_role),
        if result.primary_farmer {
            ", primary farmer"
        } else {
            ""
        },
        result.pick_round,
        result.pick_index,
    ));
    out.push_str(&format!("Lane: {}\n", result.lane_result));
    out.push_str(&format!("Opponent: {}\n", result.lane_opponent_hero));

    for line in &result.laning_details {
        out.push_str(&format!("  {line}\n"));
    }

    if !result.benchmark_notes.is_empty() {
        out.push_str("Benchmarks:\n");
        for note in &result.benchmark_notes {
            out.push_str(&format!("  {note}\n"));
        }
    }

    out.push_str(&format!("Rating: {}\n", result.performance_rating));

    out.push_str("Mistakes:\n");
    for (mistake, suggestion) in result.mistakes.iter().zip(&result.suggestions) {
        out.push_str(&format!("  - {mistake}\n    -> {suggestion}\n"));
    }

    if !result.statistics.is_empty() {
        let stats: Vec<String> = result
            .statistics
            .iter()
            .map(|(key, value)| format!("{key} {value}"))
            .collect();
        out.push_str(&format!("Stats: {}\n", stats.join(" | ")));
    }

    if let Some(last) = result.inventory_timeline.last() {
        let items: Vec<&str> = last.items.iter().map(|item| item.name.as_str()).collect();
        out.push_str(&format!(
            "Final items ({}s): {}\n",
            last.time,
            items.join(", ")
        ));
    }

    out
}

fn role_label(lane_role: i32) -> String {
    match lane_role {
        1 => "Safe lane".to_string(),
        2 => "Mid".to_string(),
        3 => "Off lane".to_string(),
        4 | 5 => "Support".to_string(),
        _ => "Unknown".to_string(),
    }
}
