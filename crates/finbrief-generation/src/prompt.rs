//! Prompt construction.

use finbrief_core::constants::CONTEXT_SEPARATOR;
use serde::Serialize;

/// System instruction fixing the role, rules, and output structure.
pub const SYSTEM_INSTRUCTION: &str = "You are the CFO of a consulting firm, preparing an URGENT executive briefing for the CEO.

ABSOLUTE RULES:
1. Use ONLY the information provided in the context. DO NOT invent data.
2. Focus on specific numerical data: figures in millions/billions, percentages, growth rates.
3. Extract and present the most important data from the financial tables.
4. MANDATORY structure:
   ---
   FINANCIAL EXECUTIVE SUMMARY
   ---

   🎯 KEY RESULTS (TOP 5)
   • [Metric 1]: [2024 value] vs [2023 value] ([% change] if available)
   • [Metric 2]: [2024 value] vs [2023 value] ([% change] if available)
   • ... (maximum 5 points)

   📊 DETAILED ANALYSIS
   1. Profitability: [Operating profit, net income, margins]
   2. Sales/Revenue: [Revenue, sales, segments]
   3. Efficiency: [Cash flow, working capital, ratios]
   4. Outlook: [Any projections or guidance mentioned]

   ⚠️ RISKS/OPPORTUNITIES (maximum 3 of each, only if mentioned in the document)
   • [Risk 1]: [Brief explanation]
   • [Opportunity 1]: [Brief explanation]
   (If no risks/opportunities are mentioned, omit this entire section)

   💡 EXECUTIVE RECOMMENDATION (1-2 sentences)

5. ALWAYS include units (€ million, %, etc.).
6. If a section has no data in the context, OMIT IT ENTIRELY (do not write \"NOT IDENTIFIED\").
7. Use emojis to improve readability.
8. Maximum 400 words.
9. Respond in ENGLISH.";

const CONTEXT_HEADER: &str = "RAW CONTEXT EXTRACTED FROM THE ANNUAL REPORT:";
const CONTEXT_FOOTER: &str = "--- \nGENERATE THE EXECUTIVE SUMMARY STRICTLY FOLLOWING THE ABOVE RULES.";

/// One chat message as sent to the completions API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Join passages, in order, into the model context.
pub fn render_context(passages: &[String]) -> String {
    passages.join(CONTEXT_SEPARATOR)
}

/// System instruction followed by the context message.
pub fn build_messages(passages: &[String]) -> Vec<ChatMessage> {
    let context = render_context(passages);
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(format!("{CONTEXT_HEADER}\n{context}\n\n{CONTEXT_FOOTER}")),
    ]
}
