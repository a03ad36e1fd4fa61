//! Prompt text handed to the voice assistant.

use sales_core::{KnowledgeSource, SolutionGraph};

/// Conversation guidance appended after the solutions overview.
pub const SALES_GUIDELINES: &str = r#"Conversation Strategy:
1. Start with a warm greeting and build rapport
2. Ask about their industry and specific challenges
3. Listen for keywords that match knowledge graph nodes
4. Use the graph to:
   - Identify relevant solutions
   - Draw parallels from other industries
   - Present specific impact metrics
   - Offer cross-sector insights
5. Focus on business outcomes, not technical details
6. Use quick pitch lines naturally in conversation
7. Connect their pain points to specific solutions in the graph

Key Guidelines:
- Be conversational and natural
- Listen more than you speak
- Ask open-ended questions
- Take notes of their specific needs
- Present solutions that directly address their pain points
- Be enthusiastic but not pushy
- Focus on value and outcomes

DO NOT:
- Jump straight into product features
- Use technical jargon
- Be pushy or aggressive
- Make unrealistic promises
- Rush the conversation
- Ignore their specific needs"#;

/// `patient_care_optimization` → `Patient Care Optimization`.
pub fn title_case(token: &str) -> String {
    token
        .split(|c: char| c == '_' || c.is_whitespace())
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders every sector and solution as indented plain text for the assistant context.
pub fn solutions_overview(graph: &SolutionGraph) -> String {
    let mut lines: Vec<String> = Vec::new();
    for (sector, solutions) in graph.sectors() {
        lines.push(format!("\n{} SECTOR:", sector.to_uppercase()));
        for (solution_id, record) in solutions.iter() {
            let impact = record
                .impact
                .iter()
                .map(|(metric, effect)| format!("{}: {}", metric, effect))
                .collect::<Vec<_>>()
                .join(", ");
            lines.push(format!("- {}", title_case(solution_id)));
            lines.push(format!("  Problem: {}", record.problem));
            lines.push(format!("  Solution: {}", record.solution));
            lines.push(format!("  Impact: {}", impact));
            lines.push(format!(
                "  Cross-sector: Similar to {}",
                title_case(&record.cross_sector.similar_to)
            ));
        }
    }
    lines.join("\n")
}

/// Full system context for the assistant.
pub fn assistant_context(source: &dyn KnowledgeSource) -> String {
    format!(
        r#"You are an experienced AI solutions sales representative with deep knowledge of AI applications across industries. Use the following knowledge graph to guide your conversation and solution recommendations:

Available Sectors and Solutions:
{}

{}"#,
        solutions_overview(source.graph()),
        SALES_GUIDELINES
    )
}

/// Opening line spoken when the callee answers.
pub fn first_message(customer_name: Option<&str>, sales_rep: &str, brand_name: &str) -> String {
    let name = customer_name.filter(|n| !n.trim().is_empty()).unwrap_or("there");
    format!(
        "Hi {}, this is {} from {}. I hope you're doing well today. \
         I'd love to learn more about your business and explore how AI could help \
         streamline your operations. Would you have a few minutes to chat?",
        name, sales_rep, brand_name
    )
}

/// Quick pitches of one sector, one bullet per solution. Unknown sector → `""`.
pub fn sector_pitch(source: &dyn KnowledgeSource, sector: &str) -> String {
    let solutions = source.graph().solutions_for_sector(sector);
    if solutions.is_empty() {
        return String::new();
    }
    let mut out = format!("{} SOLUTIONS:", sector.to_uppercase());
    for (solution_id, record) in solutions.iter() {
        out.push_str(&format!("\n- {}: {}", title_case(solution_id), record.quick_pitch));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::BuiltinSolutions;

    #[test]
    fn title_case_replaces_underscores() {
        assert_eq!(title_case("patient_care_optimization"), "Patient Care Optimization");
        assert_eq!(title_case("retail_inventory_optimization"), "Retail Inventory Optimization");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn overview_lists_every_sector_and_solution() {
        let overview = solutions_overview(SolutionGraph::builtin());
        assert!(overview.starts_with("\nHEALTHCARE SECTOR:\n- Patient Care Optimization"));
        let headers = [
            "FINANCE SECTOR:",
            "RETAIL SECTOR:",
            "MANUFACTURING SECTOR:",
            "EDUCATION SECTOR:",
        ];
        for header in headers {
            assert!(overview.contains(header), "{}", header);
        }
        assert!(overview
            .contains("  Impact: detection_speed: 60% faster, loss_reduction: 35% reduction"));
        assert!(overview.contains("  Cross-sector: Similar to Healthcare Insurance Fraud"));
    }

    #[test]
    fn context_embeds_overview_and_guidelines() {
        let context = assistant_context(&BuiltinSolutions);
        assert!(context.contains("Available Sectors and Solutions:\n\nHEALTHCARE SECTOR:"));
        assert!(context.ends_with("- Ignore their specific needs"));
    }

    #[test]
    fn first_message_defaults_to_there() {
        let msg = first_message(None, "Alex", "AI Solutions");
        assert!(msg.starts_with("Hi there, this is Alex from AI Solutions. I hope"));
        assert!(msg.contains("today. I'd love"));
        let msg = first_message(Some("John"), "Alex", "AI Solutions");
        assert!(msg.starts_with("Hi John,"));
    }

    #[test]
    fn sector_pitch_for_known_and_unknown_sector() {
        let pitch = sector_pitch(&BuiltinSolutions, "Finance");
        assert!(pitch.starts_with("FINANCE SOLUTIONS:"));
        assert!(pitch.contains(
            "- Fraud Detection: Our AI detects fraudulent transactions in real-time, \
             reducing losses by 35%"
        ));
        assert_eq!(sector_pitch(&BuiltinSolutions, "mining"), "");
    }
}
