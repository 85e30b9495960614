//! Result output: CSV artifact plus a console preview table.

use leadscout_core::LeadResult;

/// Derives the output CSV filename from the search terms, e.g.
/// `scout_gym_San_Diego_CA.csv`. Runs of non-alphanumeric characters
/// become a single underscore so the same search always maps to the same
/// file.
pub(crate) fn output_filename(category: &str, location: &str) -> String {
    format!("scout_{}_{}.csv", slug(category), slug(location))
}

fn slug(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_sep = false;
    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Writes one CSV row per lead, in the order given (already ranked by the
/// pipeline). Unknown ratings and sentiments are left as empty cells
/// rather than fabricated zeros.
pub(crate) fn write_csv(path: &str, leads: &[LeadResult]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "name",
        "place_id",
        "rating",
        "review_count",
        "website",
        "avg_sentiment",
        "lead_score",
        "reasons",
    ])?;

    for lead in leads {
        writer.write_record([
            lead.name.as_str(),
            lead.place_id.as_str(),
            &lead.rating.map(|r| r.to_string()).unwrap_or_default(),
            &lead.review_count.to_string(),
            lead.website.as_str(),
            &lead.avg_sentiment.map(|s| s.to_string()).unwrap_or_default(),
            &lead.score.to_string(),
            &lead.reasons.join("; "),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Prints the top `limit` leads as a fixed-width console table.
pub(crate) fn print_preview(leads: &[LeadResult], limit: usize) {
    println!(
        "{:>5}  {:<28}  {:>6}  {:>7}  {:<36}  {}",
        "score", "name", "rating", "reviews", "website", "reasons"
    );
    for lead in leads.iter().take(limit) {
        let rating = lead
            .rating
            .map_or_else(|| "-".to_string(), |r| format!("{r:.1}"));
        println!(
            "{:>5}  {:<28}  {:>6}  {:>7}  {:<36}  {}",
            lead.score,
            clip(&lead.name, 28),
            rating,
            lead.review_count,
            clip(&lead.website, 36),
            lead.reasons.join("; ")
        );
    }
}

/// Clips a display value to at most `max` characters.
fn clip(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let kept: String = value.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}…")
}
