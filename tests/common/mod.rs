#![allow(dead_code)]
use amend::runtime::fetcher::Fetcher;
use amend::types::{Article, Clause, LawDocument, Paragraph, SubItem};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub fn clause(number: &str, text: &str) -> Clause {
    Clause {
        number: number.to_string(),
        text: text.to_string(),
        sub_items: Vec::new(),
    }
}

pub fn clause_with_items(number: &str, text: &str, items: Vec<SubItem>) -> Clause {
    Clause {
        sub_items: items,
        ..clause(number, text)
    }
}

pub fn sub_item(letter: &str, lines: &[&str]) -> SubItem {
    SubItem {
        letter: letter.to_string(),
        lines: lines.iter().map(|line| line.to_string()).collect(),
    }
}

pub fn paragraph(number: &str, clauses: Vec<Clause>) -> Paragraph {
    Paragraph {
        number: number.to_string(),
        clauses,
    }
}

pub fn article(number: &str, branch: &str, paragraphs: Vec<Paragraph>) -> Article {
    Article {
        number: number.to_string(),
        branch: branch.to_string(),
        paragraphs,
    }
}

pub fn law(name: &str, articles: Vec<Article>) -> LawDocument {
    LawDocument {
        name: name.to_string(),
        articles,
    }
}

/// Serves canned bodies by URL and records every request.
pub struct MockFetcher {
    fixtures: Mutex<HashMap<String, String>>,
    requests: Mutex<Vec<String>>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            fixtures: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn add_fixture(&self, url: &str, body: &str) {
        self.fixtures
            .lock()
            .unwrap()
            .insert(url.to_string(), body.to_string());
    }

    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> Result<String, String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.fixtures
            .lock()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| format!("HTTP error 404 fetching {url}"))
    }
}

/// One page of search results in the service's XML shape.
pub fn search_page(laws: &[(&str, &str)]) -> String {
    let body = laws
        .iter()
        .enumerate()
        .map(|(idx, (name, mst))| {
            format!(
                "<law id=\"{}\"><법령일련번호>{mst}</법령일련번호><법령명한글><![CDATA[{name}]]></법령명한글></law>",
                idx + 1
            )
        })
        .collect::<String>();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><LawSearch><totalCnt>{}</totalCnt>{body}</LawSearch>",
        laws.len()
    )
}

/// A law body with a single article holding the given clauses under one paragraph.
pub fn law_body(name: &str, article_no: &str, paragraph_no: &str, clauses: &[(&str, &str)]) -> String {
    let clauses = clauses
        .iter()
        .map(|(number, text)| format!("<호><호번호>{number}</호번호><호내용>{text}</호내용></호>"))
        .collect::<String>();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
         <법령><기본정보><법령명_한글>{name}</법령명_한글></기본정보>\
         <조문><조문단위><조문번호>{article_no}</조문번호><조문가지번호></조문가지번호>\
         <항><항번호>{paragraph_no}</항번호>{clauses}</항></조문단위></조문></법령>"
    )
}
