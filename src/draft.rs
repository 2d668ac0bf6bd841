use amend::drafter::{draft_amendments, WordPair};
use amend::parser::parse_law_xml;

type DynError = Box<dyn std::error::Error + Send + Sync + 'static>;

fn main() -> Result<(), DynError> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).collect::<Vec<_>>();
    if args.len() < 3 {
        eprintln!("Usage: draft <law_xml_file>... <find_word> <replace_word>");
        std::process::exit(2);
    }

    let replace_word = args.pop().unwrap_or_default();
    let find_word = args.pop().unwrap_or_default();

    let mut documents = Vec::with_capacity(args.len());
    for path in &args {
        let xml = std::fs::read_to_string(path)?;
        let mut document = parse_law_xml(&xml).map_err(|e| format!("{path}: {e}"))?;
        if document.name.is_empty() {
            document.name = path.clone();
        }
        documents.push(document);
    }

    let results = draft_amendments(&documents, WordPair::new(&find_word, &replace_word));
    println!("{}", results.join("\n\n"));
    Ok(())
}
