use crate::config::AmendConfig;
use crate::parser::parse_law_search_xml;
use crate::runtime::fetcher::Fetcher;
use crate::runtime::logging::{log_event, LogLevel};
use crate::types::LawSummary;
use serde_json::json;
use std::sync::Arc;

/// Client for the law search and law body endpoints.
pub struct LawApi {
    fetcher: Arc<dyn Fetcher>,
    config: AmendConfig,
}

impl LawApi {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: AmendConfig) -> Self {
        Self { fetcher, config }
    }

    /// Exact-phrase search among current acts (`knd=A0002`), body text included (`search=2`).
    pub fn search_url(&self, query: &str, page: usize) -> String {
        let exact_query = format!("\"{query}\"");
        format!(
            "{}/DRF/lawSearch.do?OC={}&target=law&type=XML&display={}&page={page}&search=2&knd=A0002&query={}",
            self.config.api_base,
            self.config.oc,
            self.config.page_size,
            urlencoding::encode(&exact_query)
        )
    }

    pub fn law_url(&self, mst: &str) -> String {
        format!(
            "{}/DRF/lawService.do?OC={}&target=law&MST={}&type=XML",
            self.config.api_base,
            self.config.oc,
            urlencoding::encode(mst)
        )
    }

    /// Every law whose text contains `query`, across all result pages.
    ///
    /// A failure on the first page is an error; a later failure ends paging
    /// with the laws collected so far.
    pub async fn search_laws(&self, query: &str) -> Result<Vec<LawSummary>, String> {
        let mut laws = Vec::new();
        let mut page = 1;

        loop {
            let url = self.search_url(query, page);
            let fetched = self.fetcher.fetch(&url).await;
            let page_laws = match fetched.and_then(|xml| parse_law_search_xml(&xml)) {
                Ok(page_laws) => page_laws,
                Err(err) if page == 1 => return Err(err),
                Err(err) => {
                    log_event(
                        LogLevel::Warn,
                        "search paging stopped early",
                        Some(json!({ "page": page, "error": err })),
                    );
                    break;
                }
            };

            let count = page_laws.len();
            laws.extend(page_laws);
            if count < self.config.page_size || count == 0 {
                break;
            }
            page += 1;
        }

        Ok(laws)
    }

    /// Body XML for one law, or `None` when it cannot be fetched.
    pub async fn fetch_law_text(&self, mst: &str) -> Option<String> {
        match self.fetcher.fetch(&self.law_url(mst)).await {
            Ok(xml) => Some(xml),
            Err(err) => {
                log_event(
                    LogLevel::Warn,
                    "law body fetch failed",
                    Some(json!({ "mst": mst, "error": err })),
                );
                None
            }
        }
    }
}
