use crate::summary::{DatasetSummary, RunSummary};

/// Render a deterministic markdown report with one table per chart.
pub fn render_report(summary: &RunSummary) -> String {
    let mut lines = Vec::new();

    lines.push("# Rentalgen Dataset Summary".to_string());
    lines.push(String::new());
    lines.push("## Run summary".to_string());
    lines.push(format!("- run_id: {}", optional(summary.run_id.as_deref())));
    lines.push(format!(
        "- seed: {}",
        optional(summary.seed.map(|seed| seed.to_string()).as_deref())
    ));
    lines.push(format!("- schema_version: {}", summary.schema.schema_version));
    let order = summary
        .schema
        .fk_graph
        .topo_order
        .as_ref()
        .map(|order| order.join(" -> "))
        .unwrap_or_else(|| "-".to_string());
    lines.push(format!("- load order: {order}"));
    lines.push(String::new());

    push_dataset_sections(&mut lines, &summary.dataset);

    lines.push("## Recommendations".to_string());
    lines.extend(recommendations(&summary.dataset));
    lines.join("\n")
}

fn push_dataset_sections(lines: &mut Vec<String>, dataset: &DatasetSummary) {
    lines.push("## Row counts".to_string());
    lines.push("| collection | rows |".to_string());
    lines.push("| --- | --- |".to_string());
    for collection in &dataset.collections {
        lines.push(format!("| {} | {} |", collection.collection, collection.rows));
    }
    lines.push(String::new());

    lines.push("## Total vs unique".to_string());
    lines.push("| field | total | unique |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for counts in &dataset.total_vs_unique {
        lines.push(format!(
            "| {} | {} | {} |",
            counts.field, counts.total, counts.unique
        ));
    }
    lines.push(String::new());

    lines.push("## Primary key uniqueness".to_string());
    lines.push("| key | total | unique |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for counts in &dataset.primary_keys {
        lines.push(format!(
            "| {} | {} | {} |",
            counts.field, counts.total, counts.unique
        ));
    }
    lines.push(String::new());

    lines.push("## People per age".to_string());
    lines.push("| age | people |".to_string());
    lines.push("| --- | --- |".to_string());
    for bucket in &dataset.people_per_age {
        lines.push(format!("| {} | {} |", bucket.age, bucket.people));
    }
    lines.push(String::new());

    lines.push("## Transactions per address".to_string());
    lines.push("| address | transactions | share |".to_string());
    lines.push("| --- | --- | --- |".to_string());
    for share in &dataset.transactions_per_address {
        lines.push(format!(
            "| {} | {} | {:.1}% |",
            table_cell(&share.address),
            share.transactions,
            share.percent
        ));
    }
    lines.push(String::new());

    lines.push("## Referential integrity".to_string());
    lines.push("| field | dangling |".to_string());
    lines.push("| --- | --- |".to_string());
    for (field, count) in &dataset.integrity.dangling {
        lines.push(format!("| {field} | {count} |"));
    }
    lines.push(format!("- checked references: {}", dataset.integrity.checked));
    for example in &dataset.integrity.examples {
        lines.push(format!("- {}", table_cell(example)));
    }
    lines.push(String::new());
}

fn recommendations(dataset: &DatasetSummary) -> Vec<String> {
    let mut lines = Vec::new();
    if dataset.integrity.total_dangling() > 0 {
        lines.push("- regenerate or repair transactions referencing missing keys.".to_string());
    }
    for counts in &dataset.primary_keys {
        if counts.unique < counts.total {
            let repeats = counts.total - counts.unique;
            lines.push(format!(
                "- {} repeats {repeats} value(s); bulk loading breaks its primary key.",
                counts.field
            ));
        }
    }
    if lines.is_empty() {
        lines.push("- no issues detected; compare summaries across runs for drift.".to_string());
    }
    lines
}

fn optional(value: Option<&str>) -> String {
    value.unwrap_or("-").to_string()
}

/// Keep multi-line values on one markdown table row.
fn table_cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " / ")
}
