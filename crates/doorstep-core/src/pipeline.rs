//! Batch analysis pipeline over the record store and the model client.

use crate::error::ReportError;
use crate::ingest::new_memo;
use crate::prompt::assemble_prompt;
use chrono::Utc;
use doorstep_config::ModelConfig;
use doorstep_llm::ChatClient;
use doorstep_store::{BatchAnalysisRecord, MemoRecord, RecordStore};
use log::info;
use std::sync::Arc;
use uuid::Uuid;

/// Fixed separator between the topic summary and the reframed questions in a
/// report body.
pub const REPORT_SECTION_SEPARATOR: &str = "Script Recommendations:";

/// System instruction for the topic summarization turn.
const CANVASS_SYSTEM_INSTRUCTION: &str = "The text contained in <transcripts> is a set of \
voice transcripts from canvassers knocking doors ahead of an election. The canvassers are \
talking with potential voters about their plans for voting during the election, and trying \
to answer questions for any concerns the voters may have.";

/// Follow-up instruction for the reframing turn.
const REFRAME_INSTRUCTION: &str = "Reframe the above topics into questions or prompts that \
the canvassers can weave into future conversations with voters.\n\nThe questions should be \
casual and understandable to a rural audience.";

/// Report pipeline facade.
///
/// One linear pass per report run: list memo texts, assemble the prompt,
/// invoke the model twice, persist the prompt/output pair. Any step's
/// failure aborts the run; nothing partial is written, so the previous
/// analysis stays the current report.
pub struct ReportPipeline {
    store: Arc<dyn RecordStore>,
    client: Arc<dyn ChatClient>,
    model: ModelConfig,
}

impl ReportPipeline {
    /// Build a pipeline over the given store and chat client.
    pub fn new(store: Arc<dyn RecordStore>, client: Arc<dyn ChatClient>, model: ModelConfig) -> Self {
        Self {
            store,
            client,
            model,
        }
    }

    /// Accept one memo submission and persist it.
    ///
    /// Returns the stored record. Whatever the caller provided transits into
    /// storage; only fully missing fields are rejected, at the boundary
    /// above this crate.
    pub async fn submit_memo(
        &self,
        latitude: f64,
        longitude: f64,
        memo: impl Into<String>,
    ) -> Result<MemoRecord, ReportError> {
        let record = new_memo(latitude, longitude, memo);
        self.store
            .insert_memos(std::slice::from_ref(&record))
            .await?;
        info!("accepted memo submission (id={})", record.id);
        Ok(record)
    }

    /// Run the full pipeline and persist a new batch analysis record.
    ///
    /// Returns the persisted record, so a caller composing "generate then
    /// display" needs no second fetch.
    pub async fn generate_report(&self) -> Result<BatchAnalysisRecord, ReportError> {
        let memos = self.store.list_memo_texts().await?;
        let prompt = assemble_prompt(&memos);

        let exchange = self
            .client
            .invoke(
                CANVASS_SYSTEM_INSTRUCTION,
                &prompt,
                self.model.topic_temperature,
            )
            .await?;
        let reframed = self
            .client
            .invoke_follow_up(&exchange, REFRAME_INSTRUCTION, self.model.reframe_temperature)
            .await?;

        let record = BatchAnalysisRecord {
            id: Uuid::new_v4(),
            input_prompt: prompt,
            output: combine_report(&exchange.reply, &reframed),
            created_at: Utc::now(),
        };
        self.store.insert_analysis(&record).await?;
        info!(
            "generated batch analysis (id={}, memos={}, model={})",
            record.id,
            memos.len(),
            self.client.model_name()
        );
        Ok(record)
    }

    /// Return the output of the most recent batch analysis.
    pub async fn latest_report(&self) -> Result<String, ReportError> {
        match self.store.latest_analysis().await? {
            Some(record) => Ok(record.output),
            None => Err(ReportError::NoReport),
        }
    }
}

/// Combine the two model outputs into the report body.
fn combine_report(topics: &str, reframed: &str) -> String {
    format!("{topics}\n\n{REPORT_SECTION_SEPARATOR}\n\n{reframed}")
}

#[cfg(test)]
mod tests {
    use super::combine_report;
    use pretty_assertions::assert_eq;

    #[test]
    fn combine_report_joins_sections_with_fixed_separator() {
        assert_eq!(
            combine_report("Topic A", "Reframed A"),
            "Topic A\n\nScript Recommendations:\n\nReframed A"
        );
    }
}
