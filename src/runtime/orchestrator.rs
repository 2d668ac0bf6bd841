use crate::drafter::{draft_positioned, WordPair};
use crate::parser::parse_law_xml;
use crate::runtime::law_api::LawApi;
use crate::runtime::logging::{log_event, LogLevel};
use crate::types::LawDocument;
use serde_json::json;

/// Fetches the bodies of every law that mentions `find` and parses them, each
/// paired with its position in the search results. Laws whose body cannot be
/// fetched or parsed are skipped without shifting the others' positions.
pub async fn fetch_documents(
    api: &LawApi,
    find: &str,
) -> Result<Vec<(usize, LawDocument)>, String> {
    let summaries = api.search_laws(find).await?;
    log_event(
        LogLevel::Info,
        "law search complete",
        Some(json!({ "query": find, "laws": summaries.len() })),
    );

    let mut documents = Vec::with_capacity(summaries.len());
    for (position, summary) in summaries.iter().enumerate() {
        let Some(xml) = api.fetch_law_text(&summary.mst).await else {
            continue;
        };
        match parse_law_xml(&xml) {
            Ok(mut document) => {
                if !summary.name.is_empty() {
                    document.name = summary.name.clone();
                }
                documents.push((position, document));
            }
            Err(err) => log_event(
                LogLevel::Warn,
                "law body could not be parsed",
                Some(json!({ "law": summary.name, "mst": summary.mst, "error": err })),
            ),
        }
    }

    Ok(documents)
}

/// Runs the whole pipeline for one word pair: search, fetch, parse and draft.
pub async fn run_amendment(api: &LawApi, find: &str, replace: &str) -> Result<Vec<String>, String> {
    if find.is_empty() {
        return Err("find word must not be empty".to_string());
    }

    tracing::info!("[Amend] Drafting amendments: {} -> {}", find, replace);
    let documents = fetch_documents(api, find).await?;
    let results = draft_positioned(
        documents.iter().map(|(position, document)| (*position, document)),
        WordPair::new(find, replace),
    );

    tracing::info!(
        "[Amend] Drafted {} amendment block(s) from {} law(s)",
        results.len(),
        documents.len()
    );
    Ok(results)
}
