//! Voice assistant payload sent with each outbound call.

use crate::prompts::{assistant_context, first_message};
use sales_core::{CoreConfig, KnowledgeSource};
use serde::{Deserialize, Serialize};

pub const CALL_TYPE: &str = "sales";
pub const CALL_PURPOSE: &str = "ai_solutions_demo";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantMetadata {
    pub phone_number: String,
    pub call_type: String,
    pub purpose: String,
    pub customer_name: Option<String>,
}

/// Inline assistant definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantDefinition {
    pub first_message: String,
    pub context: String,
    pub model: String,
    pub voice: String,
    pub recording_enabled: bool,
    pub interruptions_enabled: bool,
    pub metadata: AssistantMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableValues {
    pub customer_name: String,
    pub company_name: String,
    pub sales_rep: String,
}

/// Template variables substituted by the provider at call time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantOverrides {
    pub variable_values: VariableValues,
}

/// Assistant plus overrides for one callee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedAssistant {
    pub assistant: AssistantDefinition,
    pub overrides: AssistantOverrides,
}

impl ComposedAssistant {
    /// Builds the assistant for `phone_number` from config identity and the knowledge graph.
    pub fn compose(
        config: &CoreConfig,
        source: &dyn KnowledgeSource,
        phone_number: &str,
        customer_name: Option<&str>,
    ) -> Self {
        let customer_name = customer_name.filter(|n| !n.trim().is_empty());
        let assistant = AssistantDefinition {
            first_message: first_message(customer_name, &config.sales_rep, &config.brand_name),
            context: assistant_context(source),
            model: config.model.clone(),
            voice: config.voice.clone(),
            recording_enabled: true,
            interruptions_enabled: true,
            metadata: AssistantMetadata {
                phone_number: phone_number.to_string(),
                call_type: CALL_TYPE.to_string(),
                purpose: CALL_PURPOSE.to_string(),
                customer_name: customer_name.map(str::to_string),
            },
        };
        let overrides = AssistantOverrides {
            variable_values: VariableValues {
                customer_name: customer_name.unwrap_or("there").to_string(),
                company_name: config.company_name.clone(),
                sales_rep: config.sales_rep.clone(),
            },
        };
        Self {
            assistant,
            overrides,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sales_core::BuiltinSolutions;

    #[test]
    fn compose_fills_identity_and_metadata() {
        let config = CoreConfig::default();
        let composed =
            ComposedAssistant::compose(&config, &BuiltinSolutions, "+14155552671", Some("John"));
        assert!(composed
            .assistant
            .first_message
            .starts_with("Hi John, this is Alex from AI Solutions. "));
        assert_eq!(composed.overrides.variable_values.company_name, "AI Solutions Inc");
        assert_eq!(composed.assistant.model, "gpt-4");
        assert_eq!(composed.assistant.voice, "jennifer-playht");
        assert_eq!(composed.assistant.metadata.purpose, "ai_solutions_demo");
        assert_eq!(composed.overrides.variable_values.customer_name, "John");
        assert_eq!(composed.overrides.variable_values.sales_rep, "Alex");
    }

    #[test]
    fn serialized_field_names_are_camel_case() {
        let config = CoreConfig::default();
        let composed =
            ComposedAssistant::compose(&config, &BuiltinSolutions, "+14155552671", None);
        let json = serde_json::to_value(&composed).unwrap();
        assert_eq!(json["assistant"]["recordingEnabled"], true);
        assert_eq!(json["assistant"]["interruptionsEnabled"], true);
        assert_eq!(json["assistant"]["metadata"]["call_type"], "sales");
        assert!(json["assistant"]["metadata"]["customer_name"].is_null());
        assert_eq!(json["overrides"]["variableValues"]["customer_name"], "there");
    }
}
