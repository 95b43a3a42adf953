//! Dependency attachment.
//!
//! Moves each condition from the schema's `Dependencies` list onto the
//! record it targets. Conditions accumulate on a record in presentation
//! order; a condition whose target resolves nowhere is dropped with a
//! diagnostic and processing continues.

use tracing::{info, warn};

use esdf_model::{ItemKind, Schema};

/// Outcome of one attachment pass.
#[derive(Debug, Clone, Default)]
pub struct AttachReport {
    /// Conditions appended to a record.
    pub attached: usize,
    /// Diagnostics for dropped conditions, in presentation order.
    pub unresolved: Vec<String>,
}

impl AttachReport {
    pub fn is_clean(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Attach every pending condition to its target record.
///
/// Drains `schema.dependencies`; afterwards each resolvable condition lives
/// in its target's condition list and the report accounts for the rest.
pub fn attach_conditions(schema: &mut Schema) -> AttachReport {
    let attribute_index = schema.attribute_index();
    let dataset_index = schema.dataset_index();
    let mut report = AttachReport::default();

    for condition in std::mem::take(&mut schema.dependencies) {
        let Some((kind, name)) = condition.target() else {
            let message = "condition without a target".to_string();
            warn!("{message}; condition dropped");
            report.unresolved.push(message);
            continue;
        };
        let position = match kind {
            ItemKind::Attribute => attribute_index.get(name),
            ItemKind::Dataset => dataset_index.get(name),
        };
        match position {
            Some(position) => {
                match kind {
                    ItemKind::Attribute => {
                        schema.attributes[position].conditions.push(condition);
                    }
                    ItemKind::Dataset => {
                        schema.datasets[position].conditions.push(condition);
                    }
                }
                report.attached += 1;
            }
            None => {
                let message = format!("{kind} {name} not found");
                warn!("{message}; condition dropped");
                report.unresolved.push(message);
            }
        }
    }

    info!(
        attached = report.attached,
        dropped = report.unresolved.len(),
        "attached dependency conditions"
    );
    report
}
