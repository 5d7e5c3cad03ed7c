//! Output formatting for CLI commands.
//!
//! Every command produces a serializable report. [`output_result`] prints it
//! either as JSON or through its [`HumanOutput`] rendering. Autocomplete also
//! produces a full structural dump of every suggestion's trie node, which is
//! written to a file with [`write_full_dump`].

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, ShabdaArgs};
use crate::error::Result;
use crate::index::{IndexStats, Occurrence, TrieNode, WordMatch};

/// Result structure for exact word search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: String,
    pub total_matches: usize,
    pub duration_ms: f64,
    pub occurrences: Vec<Occurrence>,
}

/// Short summary of one autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactMatch {
    pub word: String,
    pub ref_count: usize,
    /// Distinct document ids in the order they first occur.
    pub doc_ids: Vec<String>,
}

impl CompactMatch {
    pub fn from_match(word_match: &WordMatch<'_>) -> Self {
        let occurrences = word_match.occurrences();
        let mut seen: AHashSet<&str> = AHashSet::new();
        let doc_ids: Vec<String> = occurrences
            .iter()
            .map(Occurrence::doc_id)
            .filter(|doc_id| seen.insert(*doc_id))
            .map(String::from)
            .collect();

        CompactMatch {
            word: word_match.word.clone(),
            ref_count: occurrences.len(),
            doc_ids,
        }
    }
}

/// Full structural view of the trie node a word ends at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeDump {
    pub prefix: String,
    pub children: Vec<String>,
    pub is_end_of_word: bool,
    pub references: Vec<Occurrence>,
}

impl NodeDump {
    pub fn from_node(prefix: &str, node: &TrieNode) -> Self {
        NodeDump {
            prefix: prefix.to_string(),
            children: node.child_chars().map(String::from).collect(),
            is_end_of_word: node.is_terminal(),
            references: node.occurrences().to_vec(),
        }
    }

    pub fn from_match(word_match: &WordMatch<'_>) -> Self {
        Self::from_node(&word_match.word, word_match.node)
    }
}

/// Result structure for autocomplete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutocompleteReport {
    pub prefix: String,
    pub total_matches: usize,
    pub duration_ms: f64,
    pub suggestions: Vec<CompactMatch>,
    /// Where the full dump was written, if it was.
    pub full_output: Option<String>,
}

/// Result structure for the trie outline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeReport {
    pub nodes: usize,
    pub outline: Vec<String>,
}

/// Human-readable rendering of a report.
pub trait HumanOutput {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()>;
}

impl HumanOutput for SearchReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "Found {} matches for '{}' in {:.3} ms:",
            self.total_matches, self.query, self.duration_ms
        )?;
        for occurrence in &self.occurrences {
            writeln!(
                out,
                " - Document: {}, Position: {}",
                occurrence.doc_id, occurrence.position
            )?;
        }
        Ok(())
    }
}

impl HumanOutput for AutocompleteReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        if self.suggestions.is_empty() {
            return writeln!(out, "No suggestions found for prefix '{}'.", self.prefix);
        }

        writeln!(
            out,
            "Autocomplete suggestions for '{}' ({} in {:.3} ms):",
            self.prefix, self.total_matches, self.duration_ms
        )?;
        for suggestion in &self.suggestions {
            writeln!(out, "{}", serde_json::to_string(suggestion).map_err(io::Error::other)?)?;
        }
        if let Some(path) = &self.full_output {
            writeln!(out, "Full output written to '{path}'")?;
        }
        Ok(())
    }
}

impl HumanOutput for TreeReport {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        for line in &self.outline {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}

impl HumanOutput for IndexStats {
    fn write_human(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Index Statistics:")?;
        writeln!(out, "════════════════")?;
        writeln!(out, "Documents: {}", self.documents)?;
        writeln!(out, "Distinct words: {}", self.words)?;
        writeln!(out, "Trie nodes: {}", self.nodes)?;
        writeln!(out, "Occurrences: {}", self.occurrences)
    }
}

/// Output a result in the format selected on the command line.
pub fn output_result<T>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &ShabdaArgs,
) -> Result<()>
where
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(out, message, result, args),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: HumanOutput>(
    out: &mut dyn Write,
    message: &str,
    result: &T,
    args: &ShabdaArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    result.write_human(out)?;
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(out: &mut dyn Write, result: &T, args: &ShabdaArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Write the full structural dump as pretty-printed UTF-8 JSON.
pub fn write_full_dump<P: AsRef<Path>>(path: P, dumps: &[NodeDump]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, dumps)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
