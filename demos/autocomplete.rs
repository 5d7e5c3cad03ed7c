//! Index a few in-memory documents and print lookups and completions.
//!
//! Run with `cargo run --example autocomplete`.

use shabda::config::IndexConfig;
use shabda::error::Result;
use shabda::index::IndexEngine;

fn main() -> Result<()> {
    let mut engine = IndexEngine::new(&IndexConfig::default())?;

    let documents = vec![
        ("ramayana.txt".to_string(), "राम राम सीता, लक्ष्मण और हनुमान".to_string()),
        ("gita.txt".to_string(), "गीता में कृष्ण और अर्जुन".to_string()),
        ("notes.txt".to_string(), "Chapter 1: रामायण कथा (2024)".to_string()),
    ];
    let indexed = engine.index_documents(documents);
    println!("Indexed {indexed} words from {} documents", engine.document_count());

    for word in ["राम", "और", "Rama"] {
        let occurrences = engine.search_word(word);
        println!("\n'{word}': {} occurrences", occurrences.len());
        for occurrence in occurrences {
            println!("  {occurrence}");
        }
    }

    for prefix in ["रा", "ग", "क"] {
        println!("\nCompletions for '{prefix}':");
        for suggestion in engine.autocomplete(prefix) {
            println!("  {} ({} refs)", suggestion.word, suggestion.occurrences().len());
        }
    }

    println!("\n{:?}", engine.stats());
    Ok(())
}
