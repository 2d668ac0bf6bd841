mod common;

use amend::drafter::{draft_amendments, WordPair};
use amend::parser::{parse_law_search_xml, parse_law_xml};
use common::search_page;

const LAW_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<법령 법령키="0012342024010100000">
  <기본정보>
    <법령ID>001234</법령ID>
    <법령명_한글><![CDATA[학교보건법]]></법령명_한글>
  </기본정보>
  <조문>
    <조문단위 조문키="0001000">
      <조문번호>1</조문번호>
      <조문여부>조문</조문여부>
      <조문내용><![CDATA[제1조(목적) 이 법은 학교의 보건관리에 필요한 사항을 규정한다.]]></조문내용>
    </조문단위>
    <조문단위 조문키="0002002">
      <조문번호>2</조문번호>
      <조문가지번호>2</조문가지번호>
      <항>
        <항번호>①</항번호>
        <항내용>① 다음 각 호의 시설을 둔다.</항내용>
        <호>
          <호번호>1.</호번호>
          <호내용><![CDATA[1. 학교의 보건실]]></호내용>
          <목>
            <목번호>가.</목번호>
            <목내용><![CDATA[가. 학교를 설립한 자
      나머지 줄]]></목내용>
          </목>
        </호>
      </항>
    </조문단위>
    <조문단위 조문키="0003000">
      <조문번호>3</조문번호>
      <호>
        <호번호>2.</호번호>
        <호내용>2. 학교 &amp; 병원</호내용>
      </호>
    </조문단위>
  </조문>
</법령>"#;

#[test]
fn parses_law_name_and_article_hierarchy() {
    let document = parse_law_xml(LAW_XML).expect("law XML should parse");

    assert_eq!(document.name, "학교보건법");
    assert_eq!(document.articles.len(), 3);

    let first = &document.articles[0];
    assert_eq!(first.number, "1");
    assert!(first.paragraphs.is_empty());

    let second = &document.articles[1];
    assert_eq!(second.number, "2");
    assert_eq!(second.branch, "2");
    assert_eq!(second.paragraphs.len(), 1);
    assert_eq!(second.paragraphs[0].number, "①");

    let clause = &second.paragraphs[0].clauses[0];
    assert_eq!(clause.number, "1.");
    assert_eq!(clause.text, "1. 학교의 보건실");
    assert_eq!(clause.sub_items.len(), 1);
    assert_eq!(clause.sub_items[0].letter, "가.");
    assert_eq!(
        clause.sub_items[0].lines,
        vec!["가. 학교를 설립한 자".to_string(), "나머지 줄".to_string()]
    );
}

#[test]
fn clauses_directly_under_an_article_get_an_unnumbered_paragraph() {
    let document = parse_law_xml(LAW_XML).expect("law XML should parse");

    let third = &document.articles[2];
    assert_eq!(third.paragraphs.len(), 1);
    assert_eq!(third.paragraphs[0].number, "");
    assert_eq!(third.paragraphs[0].clauses[0].number, "2.");
    assert_eq!(third.paragraphs[0].clauses[0].text, "2. 학교 & 병원");
}

#[test]
fn parsed_law_drafts_end_to_end() {
    let document = parse_law_xml(LAW_XML).expect("law XML should parse");

    let results = draft_amendments(&[document], WordPair::new("학교", "학원"));

    assert_eq!(
        results,
        vec![
            "① 학교보건법 일부를 다음과 같이 개정한다.\n\
             제2조의2제1항제1호 중 \"학교의\"를 \"학원의\"로 한다.\n\
             제2조의2제1항제1호가목 중 \"학교를\"을 \"학원을\"로 한다.\n\
             제3조제2호 중 \"학교\"를 \"학원\"으로 한다."
                .to_string()
        ]
    );
}

#[test]
fn rejects_malformed_law_xml() {
    let result = parse_law_xml("<법령><조문단위><조문번호>1</항></조문단위></법령>");
    assert!(result.is_err());
}

#[test]
fn parses_search_results() {
    let xml = search_page(&[("학교보건법", "251234"), ("교육기본법", "250001")]);

    let laws = parse_law_search_xml(&xml).expect("search XML should parse");

    assert_eq!(laws.len(), 2);
    assert_eq!(laws[0].name, "학교보건법");
    assert_eq!(laws[0].mst, "251234");
    assert_eq!(laws[1].name, "교육기본법");
    assert_eq!(laws[1].mst, "250001");
}

#[test]
fn empty_search_results_parse_to_nothing() {
    let laws = parse_law_search_xml("<LawSearch><totalCnt>0</totalCnt></LawSearch>")
        .expect("search XML should parse");
    assert!(laws.is_empty());
}
