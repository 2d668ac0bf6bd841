//! Groups occurrence citations by the edit they need.

use crate::numbering::format_location;
use crate::rules::render_particle_edit;
use crate::types::{Citation, EditKey};
use std::collections::{BTreeSet, HashMap};

/// Edit keys in first-seen order, each with its sorted, de-duplicated citations.
#[derive(Debug, Default)]
pub struct CitationMap {
    order: Vec<EditKey>,
    locations: HashMap<EditKey, BTreeSet<String>>,
}

impl CitationMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_occurrence(&mut self, key: EditKey, citation: &Citation) {
        let location = format_location(&citation.to_string());
        match self.locations.get_mut(&key) {
            Some(existing) => {
                existing.insert(location);
            }
            None => {
                self.order.push(key.clone());
                self.locations.insert(key, BTreeSet::from([location]));
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&EditKey, &BTreeSet<String>)> {
        self.order
            .iter()
            .filter_map(|key| self.locations.get(key).map(|locations| (key, locations)))
    }

    /// One `"<locations> 중 <edit>"` line per edit key.
    pub fn render_lines(&self) -> Vec<String> {
        self.iter()
            .map(|(key, locations)| {
                let locations = locations.iter().map(String::as_str).collect::<Vec<_>>();
                format!("{} 중 {}", render_locations(&locations), render_key(key))
            })
            .collect()
    }
}

fn render_key(key: &EditKey) -> String {
    match key.suffix {
        Some(suffix) => render_particle_edit(
            &format!("{}{suffix}", key.original),
            &format!("{}{suffix}", key.replacement),
            key.particle,
        ),
        None => render_particle_edit(&key.original, &key.replacement, key.particle),
    }
}

/// Joins citations as `AㆍBㆍ... 및 Z`; a single citation is returned as is.
pub fn render_locations(locations: &[&str]) -> String {
    match locations.split_last() {
        None => String::new(),
        Some((last, [])) => format_location(last),
        Some((last, rest)) => {
            let head = rest
                .iter()
                .map(|location| format_location(location))
                .collect::<Vec<_>>()
                .join("ㆍ");
            format!("{head} 및 {}", format_location(last))
        }
    }
}
