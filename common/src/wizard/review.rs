use crate::display::sanitize_input;

use super::FieldValues;
use super::flow::{FlowSpec, ReviewValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewItem {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSection {
    pub title: &'static str,
    pub items: Vec<ReviewItem>,
}

impl ReviewSection {
    pub fn value(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.label == label)
            .map(|i| i.value.as_str())
    }
}

/// Read-only summary of the collected values, in the flow's section order.
pub fn build_review<F>(spec: &FlowSpec, values: &FieldValues<F>) -> Vec<ReviewSection> {
    spec.review
        .iter()
        .map(|section| ReviewSection {
            title: section.title,
            items: section
                .items
                .iter()
                .filter_map(|(label, source)| {
                    resolve(spec, values, *source).map(|value| ReviewItem {
                        label,
                        value: sanitize_input(&value),
                    })
                })
                .collect(),
        })
        .collect()
}

fn resolve<F>(spec: &FlowSpec, values: &FieldValues<F>, source: ReviewValue) -> Option<String> {
    match source {
        ReviewValue::Text(name) => Some(values.text(name).trim().to_string()),
        ReviewValue::TextOr(name, placeholder) => {
            let text = values.text(name).trim();
            Some(if text.is_empty() { placeholder } else { text }.to_string())
        }
        ReviewValue::OptionLabel(name) => {
            let raw = values.text(name);
            let label = spec.field(name).and_then(|f| f.option_label(raw));
            Some(label.unwrap_or(raw).to_string())
        }
        ReviewValue::Uploaded(name) => {
            (!values.files(name).is_empty()).then(|| "Uploaded".to_string())
        }
        ReviewValue::FileCount(name) => {
            let count = values.files(name).len();
            (count > 0).then(|| format!("{count} file(s) uploaded"))
        }
    }
}
