use crate::josa::Particle;
use crate::numbering::law_ordinal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One law's body, reduced to the levels that carry amendable text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawDocument {
    pub name: String,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub number: String,
    #[serde(default)]
    pub branch: String,
    #[serde(default)]
    pub paragraphs: Vec<Paragraph>,
}

/// A paragraph (항). An empty `number` marks clauses that sit directly under the article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub number: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub sub_items: Vec<SubItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubItem {
    pub letter: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// Address of one occurrence, e.g. `제12조의2제3항제4호가목`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Citation {
    /// Already formatted article id (`제12조의2`).
    pub article: String,
    pub paragraph: Option<String>,
    pub clause: Option<String>,
    pub sub_item: Option<String>,
}

impl fmt::Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.article)?;
        if let Some(paragraph) = &self.paragraph {
            write!(f, "제{paragraph}항")?;
        }
        if let Some(clause) = &self.clause {
            write!(f, "제{clause}호")?;
        }
        if let Some(sub_item) = &self.sub_item {
            write!(f, "{sub_item}목")?;
        }
        Ok(())
    }
}

/// Identity of one amendment instruction. Occurrences with equal keys are merged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditKey {
    pub original: String,
    pub replacement: String,
    pub particle: Option<Particle>,
    pub suffix: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawAmendment {
    pub ordinal: usize,
    pub law_name: String,
    pub lines: Vec<String>,
}

impl fmt::Display for LawAmendment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} 일부를 다음과 같이 개정한다.\n{}",
            law_ordinal(self.ordinal),
            self.law_name,
            self.lines.join("\n")
        )
    }
}

/// A search hit: display name plus the MST serial used to fetch the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawSummary {
    pub name: String,
    pub mst: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmendRequest {
    pub find_word: String,
    pub replace_word: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRequest {
    pub find_word: String,
    pub replace_word: String,
    #[serde(default)]
    pub laws: Vec<LawDocument>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmendResponse {
    pub results: Vec<String>,
}
