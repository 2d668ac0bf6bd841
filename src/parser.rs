//! Readers for the XML served by the national law information service.

use crate::types::{Article, Clause, LawDocument, LawSummary, Paragraph, SubItem};
use quick_xml::events::Event;
use quick_xml::Reader;

fn tag_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

fn split_lines(text: &str) -> impl Iterator<Item = String> + '_ {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// Cursor into the document under construction.
#[derive(Default)]
struct LawBuilder {
    doc: LawDocument,
    in_article: bool,
    in_paragraph: bool,
    in_clause: bool,
    in_sub_item: bool,
}

impl LawBuilder {
    fn article(&mut self) -> Option<&mut Article> {
        if !self.in_article {
            return None;
        }
        self.doc.articles.last_mut()
    }

    fn paragraph(&mut self) -> Option<&mut Paragraph> {
        if !self.in_paragraph {
            return None;
        }
        self.article()?.paragraphs.last_mut()
    }

    fn clause(&mut self) -> Option<&mut Clause> {
        if !self.in_clause {
            return None;
        }
        self.paragraph()?.clauses.last_mut()
    }

    fn sub_item(&mut self) -> Option<&mut SubItem> {
        if !self.in_sub_item {
            return None;
        }
        self.clause()?.sub_items.last_mut()
    }

    fn open(&mut self, tag: &str) {
        match tag {
            "조문단위" => {
                self.doc.articles.push(Article::default());
                self.in_article = true;
            }
            "항" => {
                if let Some(article) = self.article() {
                    article.paragraphs.push(Paragraph::default());
                    self.in_paragraph = true;
                }
            }
            "호" => {
                // Clauses directly under an article hang off an unnumbered paragraph.
                if !self.in_paragraph {
                    if let Some(article) = self.article() {
                        article.paragraphs.push(Paragraph::default());
                        self.in_paragraph = true;
                    }
                }
                if let Some(paragraph) = self.paragraph() {
                    paragraph.clauses.push(Clause::default());
                    self.in_clause = true;
                }
            }
            "목" => {
                if let Some(clause) = self.clause() {
                    clause.sub_items.push(SubItem::default());
                    self.in_sub_item = true;
                }
            }
            _ => {}
        }
    }

    fn close(&mut self, tag: &str, parent: Option<&str>, text: &str) {
        let value = text.trim();
        match (tag, parent) {
            ("조문단위", _) => {
                self.in_article = false;
                self.in_paragraph = false;
            }
            ("항", _) => self.in_paragraph = false,
            ("호", Some("조문단위")) => {
                self.in_clause = false;
                self.in_paragraph = false;
            }
            ("호", _) => self.in_clause = false,
            ("목", _) => self.in_sub_item = false,
            ("법령명_한글", _) if self.doc.name.is_empty() => self.doc.name = value.to_string(),
            ("조문번호", Some("조문단위")) => {
                if let Some(article) = self.article() {
                    article.number = value.to_string();
                }
            }
            ("조문가지번호", Some("조문단위")) => {
                if let Some(article) = self.article() {
                    article.branch = value.to_string();
                }
            }
            ("항번호", Some("항")) => {
                if let Some(paragraph) = self.paragraph() {
                    paragraph.number = value.to_string();
                }
            }
            ("호번호", Some("호")) => {
                if let Some(clause) = self.clause() {
                    clause.number = value.to_string();
                }
            }
            ("호내용", Some("호")) => {
                if let Some(clause) = self.clause() {
                    clause.text = value.to_string();
                }
            }
            ("목번호", Some("목")) => {
                if let Some(sub_item) = self.sub_item() {
                    sub_item.letter = value.to_string();
                }
            }
            ("목내용", Some("목")) => {
                if let Some(sub_item) = self.sub_item() {
                    sub_item.lines.extend(split_lines(text));
                }
            }
            _ => {}
        }
    }
}

/// Parses a law body (`lawService.do`, XML) into its article hierarchy.
pub fn parse_law_xml(xml: &str) -> Result<LawDocument, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut current_text = String::new();
    let mut builder = LawBuilder::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let tag = tag_name(e.name().as_ref());
                builder.open(&tag);
                stack.push(tag);
                current_text.clear();
            }
            Ok(Event::Text(ref e)) => {
                let unescaped = e
                    .unescape()
                    .map_err(|err| format!("Invalid text in law XML: {err}"))?;
                current_text.push_str(&unescaped);
            }
            Ok(Event::CData(ref e)) => {
                current_text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::End(_)) => {
                let Some(tag) = stack.pop() else {
                    return Err("Unbalanced closing tag in law XML".to_string());
                };
                let parent = stack.last().map(String::as_str);
                builder.close(&tag, parent, &current_text);
                current_text.clear();
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(format!(
                    "Failed to parse law XML at position {}: {err}",
                    reader.buffer_position()
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(builder.doc)
}

/// Parses one page of `lawSearch.do` results.
pub fn parse_law_search_xml(xml: &str) -> Result<Vec<LawSummary>, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut current_text = String::new();
    let mut laws = Vec::new();
    let mut current: Option<LawSummary> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let tag = tag_name(e.name().as_ref());
                if tag == "law" {
                    current = Some(LawSummary {
                        name: String::new(),
                        mst: String::new(),
                    });
                }
                stack.push(tag);
                current_text.clear();
            }
            Ok(Event::Text(ref e)) => {
                let unescaped = e
                    .unescape()
                    .map_err(|err| format!("Invalid text in search XML: {err}"))?;
                current_text.push_str(&unescaped);
            }
            Ok(Event::CData(ref e)) => {
                current_text.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::End(_)) => {
                let Some(tag) = stack.pop() else {
                    return Err("Unbalanced closing tag in search XML".to_string());
                };
                if tag == "law" {
                    laws.extend(current.take());
                } else if stack.last().map(String::as_str) == Some("law") {
                    if let Some(law) = current.as_mut() {
                        match tag.as_str() {
                            "법령명한글" => law.name = current_text.trim().to_string(),
                            "법령일련번호" => law.mst = current_text.trim().to_string(),
                            _ => {}
                        }
                    }
                }
                current_text.clear();
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(format!(
                    "Failed to parse search XML at position {}: {err}",
                    reader.buffer_position()
                ))
            }
            _ => {}
        }
        buf.clear();
    }

    Ok(laws)
}
