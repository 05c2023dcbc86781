//! Deterministic prompt assembly for batch analysis.

/// Per-item delimiter keeps the model from merging adjacent memos.
const MEMO_OPEN: &str = "<h2>";
const MEMO_CLOSE: &str = "</h2>";

/// Assemble the analysis prompt from memo texts, in the order given.
///
/// Pure function: the same input list always yields the same string,
/// byte-for-byte, which is what makes a persisted `input_prompt` auditable.
/// An empty list produces a well-formed prompt with an empty transcripts
/// section.
pub fn assemble_prompt(memos: &[String]) -> String {
    let block = memos
        .iter()
        .map(|memo| format!("{MEMO_OPEN}{memo}{MEMO_CLOSE}"))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<transcripts>\n{block}\n</transcripts>\n\n\
         <instructions>\n\
         ## Analyze the transcripts and summarize them into 3 overall topics of concern or sentiment.\n\
         ## Each topic or concern should be only one or two sentences.\n\
         ## ONLY use the terminology and details used by the canvassers in <transcripts>. Do not use synonyms or more general categories.\n\
         ## Do not mention voter names.\n\
         ## Write only the topic or concern and no other text.\n\
         </instructions>\n"
    )
}
