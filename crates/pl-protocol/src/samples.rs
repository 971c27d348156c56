//! Labeled training samples submitted back to the NLU service.

use serde::{Deserialize, Serialize};

use crate::entities::INTENT_KIND;

/// Ground-truth label attached to a sample. No confidence field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleEntity {
    /// Entity kind being labeled (e.g. "intent").
    pub entity: String,
    /// The labeled value.
    pub value: String,
}

/// One labeled utterance for incremental training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    /// The raw utterance text.
    pub text: String,
    /// Ground-truth entity labels.
    pub entities: Vec<SampleEntity>,
}

impl Sample {
    /// A sample labeling `text` with a single intent value.
    pub fn intent(text: &str, value: &str) -> Self {
        Self {
            text: text.to_string(),
            entities: vec![SampleEntity {
                entity: INTENT_KIND.to_string(),
                value: value.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_sample_shape() {
        let sample = Sample::intent("book a dentist appointment", "appt_make");
        assert_eq!(sample.text, "book a dentist appointment");
        assert_eq!(sample.entities.len(), 1);
        assert_eq!(sample.entities[0].entity, "intent");
        assert_eq!(sample.entities[0].value, "appt_make");
    }

    #[test]
    fn serializes_to_training_wire_format() {
        let sample = Sample::intent("hmm", "appt_show");
        let json = serde_json::to_value(&sample).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "text": "hmm",
                "entities": [{"entity": "intent", "value": "appt_show"}]
            })
        );
    }
}
