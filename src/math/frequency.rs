//! Frequency ranking with first-seen tie breaking

/// Count occurrences and rank them by frequency, descending
///
/// Items with equal counts keep the order in which they were first encountered,
/// so the first entry is the earliest of the most frequent items.
pub fn most_common<I, S>(items: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for item in items {
        let item = item.as_ref();
        if let Some(entry) = counts.iter_mut().find(|(label, _)| label == item) {
            entry.1 += 1;
        } else {
            counts.push((item.to_string(), 1));
        }
    }

    // Stable sort keeps first-seen order among ties
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Arithmetic mean, or `None` for an empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}
