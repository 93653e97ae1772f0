// Search mode: per-day entries matching the filter, grouped by date

use std::collections::BTreeMap;

use super::AggregateOptions;
use crate::models::{DateGroup, Month, MonthCorpus, SearchFilter, SearchMatch, SearchReport};

/// Only dates present in a camera's infraction map are candidates; a missing date is never a zero.
pub fn search_infractions(
    corpus: &MonthCorpus,
    month: Month,
    options: &AggregateOptions,
    filter: &SearchFilter,
) -> SearchReport {
    let mut by_date: BTreeMap<String, Vec<SearchMatch>> = BTreeMap::new();
    for (week, snapshot) in corpus.iter_scope(options.scope) {
        for (id, record) in &snapshot.cameras {
            if !options.includes(*id) {
                continue;
            }
            for (date, count) in &record.infractions {
                if !filter.matches(date, *count) {
                    continue;
                }
                by_date.entry(date.clone()).or_default().push(SearchMatch {
                    week,
                    camera_id: *id,
                    camera_name: record.name.trim().to_string(),
                    infractions: *count,
                    frames: record.frames.get(date).copied(),
                });
            }
        }
    }

    let groups: Vec<DateGroup> = by_date
        .into_iter()
        .map(|(date, mut matches)| {
            matches.sort_by(|a, b| {
                b.infractions
                    .cmp(&a.infractions)
                    .then(a.camera_id.cmp(&b.camera_id))
                    .then(a.week.cmp(&b.week))
            });
            DateGroup { date, matches }
        })
        .collect();

    SearchReport {
        month,
        scope: options.scope,
        filter: filter.clone(),
        available_weeks: corpus.available_weeks(options.scope),
        count: groups.iter().map(|g| g.matches.len()).sum(),
        groups,
    }
}
