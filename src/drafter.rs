//! Walks a law's article/paragraph/clause/sub-item hierarchy and drafts its amendment.

use crate::citations::CitationMap;
use crate::josa::extract_chunk;
use crate::numbering::{format_article_id, normalize_numeral};
use crate::types::{Citation, EditKey, LawAmendment, LawDocument};
use regex::Regex;
use std::sync::LazyLock;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[가-힣A-Za-z0-9]+").expect("TOKEN_RE should compile"));
static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_RE should compile"));

pub const NO_TARGETS_MESSAGE: &str = "⚠️ 개정 대상 조문이 없습니다.";

/// The word being replaced and what replaces it.
#[derive(Debug, Clone, Copy)]
pub struct WordPair<'a> {
    pub find: &'a str,
    pub replace: &'a str,
}

impl<'a> WordPair<'a> {
    pub fn new(find: &'a str, replace: &'a str) -> Self {
        Self { find, replace }
    }
}

fn clean(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, "").into_owned()
}

fn scan_text(map: &mut CitationMap, text: &str, words: WordPair<'_>, citation: &Citation) {
    if !clean(text).contains(words.find) {
        return;
    }
    for token in TOKEN_RE.find_iter(text).map(|m| m.as_str()) {
        if !token.contains(words.find) {
            continue;
        }
        let extraction = extract_chunk(token, words.find);
        if !extraction.chunk.contains(words.find) {
            continue;
        }
        let replacement = extraction.chunk.replace(words.find, words.replace);
        tracing::trace!(token, chunk = %extraction.chunk, %citation, "matched token");
        map.add_occurrence(
            EditKey {
                original: extraction.chunk,
                replacement,
                particle: extraction.particle,
                suffix: extraction.suffix,
            },
            citation,
        );
    }
}

/// Collects every edit the law needs, keyed by edit and in first-seen order.
pub fn collect_edits(law: &LawDocument, words: WordPair<'_>) -> CitationMap {
    let mut map = CitationMap::new();
    if words.find.is_empty() {
        return map;
    }

    for article in &law.articles {
        let article_id = format_article_id(article.number.trim(), article.branch.trim());

        for paragraph in &article.paragraphs {
            let paragraph_no = normalize_numeral(paragraph.number.trim());
            let paragraph_no = (!paragraph_no.is_empty()).then_some(paragraph_no);

            for clause in &paragraph.clauses {
                let clause_citation = Citation {
                    article: article_id.clone(),
                    paragraph: paragraph_no.clone(),
                    clause: Some(clause.number.trim().to_string()),
                    sub_item: None,
                };
                scan_text(&mut map, &clause.text, words, &clause_citation);

                for sub_item in &clause.sub_items {
                    let sub_item_citation = Citation {
                        sub_item: Some(sub_item.letter.trim().to_string()),
                        ..clause_citation.clone()
                    };
                    let lines = sub_item
                        .lines
                        .iter()
                        .flat_map(|text| text.lines())
                        .map(str::trim)
                        .filter(|line| !line.is_empty());
                    for line in lines {
                        scan_text(&mut map, line, words, &sub_item_citation);
                    }
                }
            }
        }
    }

    map
}

/// Drafts one law's amendment block, or `None` when the law needs no edit.
pub fn draft_law(law: &LawDocument, ordinal: usize, words: WordPair<'_>) -> Option<LawAmendment> {
    let edits = collect_edits(law, words);
    if edits.is_empty() {
        tracing::debug!(law = %law.name, "no amendment targets");
        return None;
    }
    Some(LawAmendment {
        ordinal,
        law_name: law.name.clone(),
        lines: edits.render_lines(),
    })
}

/// Drafts every law in order, numbering each by its position in `laws`.
pub fn draft_amendments(laws: &[LawDocument], words: WordPair<'_>) -> Vec<String> {
    draft_positioned(laws.iter().enumerate(), words)
}

/// Drafts laws tagged with their position in the caller's list; the position picks
/// the ordinal marker. Laws without edits are omitted but keep their number, and
/// if none has an edit the result is the single "no targets" message.
pub fn draft_positioned<'a, I>(laws: I, words: WordPair<'_>) -> Vec<String>
where
    I: IntoIterator<Item = (usize, &'a LawDocument)>,
{
    let mut results = laws
        .into_iter()
        .filter_map(|(position, law)| draft_law(law, position, words))
        .map(|amendment| amendment.to_string())
        .collect::<Vec<_>>();
    if results.is_empty() {
        results.push(NO_TARGETS_MESSAGE.to_string());
    }
    results
}
