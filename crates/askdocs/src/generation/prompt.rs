//! Prompt templates for grounded question answering
//!
//! Uses a "stuff" strategy: every retrieved passage goes into the prompt
//! verbatim, with no truncation, summarization, or selection.

use crate::types::RetrievedPassage;

/// Prompt builder for grounded answers
pub struct PromptBuilder;

impl PromptBuilder {
    /// Build context from retrieved passages. All passages are included.
    pub fn build_context(passages: &[RetrievedPassage]) -> String {
        let mut context = String::new();

        for (i, passage) in passages.iter().enumerate() {
            let source = passage.source();
            let source_ref = if source.is_empty() {
                format!("[{}]", i + 1)
            } else {
                format!("[{}] {}", i + 1, source)
            };

            context.push_str(&format!("{}\n{}\n\n---\n\n", source_ref, passage.content));
        }

        context
    }

    /// Build the question-answering prompt
    pub fn build_qa_prompt(question: &str, context: &str) -> String {
        format!(
            r#"Based on the following context, answer the question. Only use information from the context.

Context:
{context}

Question: {question}

Answer:"#,
            context = context,
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_stuffs_every_passage() {
        let passages = vec![
            RetrievedPassage::new("First passage body.").with_source("a.txt"),
            RetrievedPassage::new("Second passage body.").with_source("b.txt"),
            RetrievedPassage::new("Third passage body."),
        ];

        let context = PromptBuilder::build_context(&passages);

        assert!(context.contains("First passage body."));
        assert!(context.contains("Second passage body."));
        assert!(context.contains("Third passage body."));
        assert!(context.contains("[1] a.txt"));
        assert!(context.contains("[2] b.txt"));
        assert!(context.contains("[3]\n"));
    }

    #[test]
    fn test_qa_prompt_contains_question_and_context() {
        let prompt = PromptBuilder::build_qa_prompt(
            "What is the capital of France?",
            "Paris is the capital of France.",
        );

        assert!(prompt.contains("What is the capital of France?"));
        assert!(prompt.contains("Paris is the capital of France."));
        assert!(prompt.ends_with("Answer:"));
    }

    #[test]
    fn test_empty_retrieval_yields_empty_context() {
        assert_eq!(PromptBuilder::build_context(&[]), "");
    }
}
