//! Schema Contract Registry.
//!
//! Declares, for each structured generation operation, the exact output
//! shape the backend must produce, independent of any provider SDK. The
//! same descriptor serves two purposes: it is serialized into the
//! provider's `responseSchema` wire format, and it structurally validates
//! the JSON the backend returns. Validation is integrity-checking only —
//! invalid output is rejected wholesale, never repaired.

use serde_json::{json, Value};

/// The two operations that require schema-constrained output. Strategy
/// generation returns free text and has no schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    KeywordResearch,
    SmartAnalysis,
}

/// A recursive description of an expected JSON shape.
#[derive(Debug, Clone)]
pub enum SchemaDescriptor {
    Object {
        /// Field name → schema, in declaration order.
        properties: Vec<(&'static str, SchemaDescriptor)>,
        required: Vec<&'static str>,
    },
    Array {
        items: Box<SchemaDescriptor>,
    },
    String {
        description: Option<&'static str>,
    },
    Integer {
        description: Option<&'static str>,
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    Enum {
        values: Vec<&'static str>,
    },
}

/// Returns the fixed output contract for an operation. Pure lookup.
pub fn schema_for(operation: Operation) -> SchemaDescriptor {
    match operation {
        Operation::KeywordResearch => keyword_list_schema(),
        Operation::SmartAnalysis => smart_analysis_schema(),
    }
}

fn keyword_list_schema() -> SchemaDescriptor {
    SchemaDescriptor::Array {
        items: Box::new(SchemaDescriptor::Object {
            properties: vec![
                ("keyword", SchemaDescriptor::String { description: None }),
                (
                    "volume",
                    SchemaDescriptor::String {
                        description: Some("Estimated monthly search volume (e.g., '1k-10k')"),
                    },
                ),
                (
                    "difficulty",
                    SchemaDescriptor::Integer {
                        description: Some("SEO Difficulty 0-100. Be realistic."),
                        minimum: Some(0),
                        maximum: Some(100),
                    },
                ),
                (
                    "intent",
                    SchemaDescriptor::Enum {
                        values: vec![
                            "Informational",
                            "Commercial",
                            "Transactional",
                            "Navigational",
                        ],
                    },
                ),
                (
                    "competition",
                    SchemaDescriptor::Enum {
                        values: vec!["Low", "Medium", "High"],
                    },
                ),
            ],
            required: vec!["keyword", "volume", "difficulty", "intent", "competition"],
        }),
    }
}

fn smart_analysis_schema() -> SchemaDescriptor {
    SchemaDescriptor::Object {
        properties: vec![
            (
                "seoScore",
                SchemaDescriptor::Integer {
                    description: Some("Score 0-100 based on original content"),
                    minimum: Some(0),
                    maximum: Some(100),
                },
            ),
            (
                "optimizedContent",
                SchemaDescriptor::String {
                    description: Some("The full rewritten content, formatted in Markdown."),
                },
            ),
            (
                "meta",
                SchemaDescriptor::Object {
                    properties: vec![
                        ("title", SchemaDescriptor::String { description: None }),
                        (
                            "description",
                            SchemaDescriptor::String { description: None },
                        ),
                        ("slug", SchemaDescriptor::String { description: None }),
                    ],
                    required: vec!["title", "description", "slug"],
                },
            ),
            (
                "schemaMarkup",
                SchemaDescriptor::String {
                    description: Some("JSON-LD script for the content type."),
                },
            ),
            (
                "internalLinks",
                SchemaDescriptor::Array {
                    items: Box::new(SchemaDescriptor::Object {
                        properties: vec![
                            ("anchor", SchemaDescriptor::String { description: None }),
                            (
                                "context",
                                SchemaDescriptor::String {
                                    description: Some("Where to insert this link and why"),
                                },
                            ),
                        ],
                        required: vec!["anchor", "context"],
                    }),
                },
            ),
            (
                "insights",
                SchemaDescriptor::Array {
                    items: Box::new(SchemaDescriptor::String {
                        description: Some("Why these changes were made."),
                    }),
                },
            ),
            (
                "criticalIssues",
                SchemaDescriptor::Array {
                    items: Box::new(SchemaDescriptor::String {
                        description: Some("Major SEO errors found in original."),
                    }),
                },
            ),
        ],
        required: vec![
            "seoScore",
            "optimizedContent",
            "meta",
            "schemaMarkup",
            "internalLinks",
            "insights",
            "criticalIssues",
        ],
    }
}

impl SchemaDescriptor {
    /// Serializes the descriptor into the provider's `responseSchema`
    /// wire format (`{"type": "OBJECT", "properties": {...}}` and friends).
    pub fn to_response_schema(&self) -> Value {
        match self {
            SchemaDescriptor::Object {
                properties,
                required,
            } => {
                let mut props = serde_json::Map::new();
                for (name, schema) in properties {
                    props.insert((*name).to_string(), schema.to_response_schema());
                }
                json!({
                    "type": "OBJECT",
                    "properties": Value::Object(props),
                    "required": required,
                })
            }
            SchemaDescriptor::Array { items } => json!({
                "type": "ARRAY",
                "items": items.to_response_schema(),
            }),
            SchemaDescriptor::String { description } => {
                let mut out = json!({ "type": "STRING" });
                if let Some(desc) = description {
                    out["description"] = json!(desc);
                }
                out
            }
            SchemaDescriptor::Integer { description, .. } => {
                let mut out = json!({ "type": "INTEGER" });
                if let Some(desc) = description {
                    out["description"] = json!(desc);
                }
                out
            }
            SchemaDescriptor::Enum { values } => json!({
                "type": "STRING",
                "enum": values,
            }),
        }
    }

    /// Structurally validates a parsed JSON value against this descriptor.
    ///
    /// Checks required fields, enum membership, integer bounds, and
    /// recursive shape. Unknown extra fields are tolerated; missing or
    /// out-of-contract values are not.
    pub fn validate(&self, value: &Value) -> Result<(), String> {
        self.validate_at(value, "$")
    }

    fn validate_at(&self, value: &Value, path: &str) -> Result<(), String> {
        match self {
            SchemaDescriptor::Object {
                properties,
                required,
            } => {
                let obj = value
                    .as_object()
                    .ok_or_else(|| format!("{path}: expected object"))?;
                for name in required {
                    if !obj.contains_key(*name) {
                        return Err(format!("{path}: missing required field '{name}'"));
                    }
                }
                for (name, schema) in properties {
                    if let Some(field) = obj.get(*name) {
                        schema.validate_at(field, &format!("{path}.{name}"))?;
                    }
                }
                Ok(())
            }
            SchemaDescriptor::Array { items } => {
                let arr = value
                    .as_array()
                    .ok_or_else(|| format!("{path}: expected array"))?;
                for (i, item) in arr.iter().enumerate() {
                    items.validate_at(item, &format!("{path}[{i}]"))?;
                }
                Ok(())
            }
            SchemaDescriptor::String { .. } => {
                if value.is_string() {
                    Ok(())
                } else {
                    Err(format!("{path}: expected string"))
                }
            }
            SchemaDescriptor::Integer {
                minimum, maximum, ..
            } => {
                let n = value
                    .as_i64()
                    .ok_or_else(|| format!("{path}: expected integer"))?;
                if let Some(min) = minimum {
                    if n < *min {
                        return Err(format!("{path}: {n} is below minimum {min}"));
                    }
                }
                if let Some(max) = maximum {
                    if n > *max {
                        return Err(format!("{path}: {n} exceeds maximum {max}"));
                    }
                }
                Ok(())
            }
            SchemaDescriptor::Enum { values } => {
                let s = value
                    .as_str()
                    .ok_or_else(|| format!("{path}: expected enum string"))?;
                if values.contains(&s) {
                    Ok(())
                } else {
                    Err(format!(
                        "{path}: '{s}' is not one of {}",
                        values.join(", ")
                    ))
                }
            }
        }
    }

    /// Checks the descriptor invariant: every required name is a declared
    /// property. Used by tests over the fixed contracts.
    #[cfg(test)]
    fn required_subset_of_properties(&self) -> bool {
        match self {
            SchemaDescriptor::Object {
                properties,
                required,
            } => {
                required
                    .iter()
                    .all(|r| properties.iter().any(|(name, _)| name == r))
                    && properties
                        .iter()
                        .all(|(_, schema)| schema.required_subset_of_properties())
            }
            SchemaDescriptor::Array { items } => items.required_subset_of_properties(),
            _ => true,
        }
    }
}
