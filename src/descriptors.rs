//! Definition descriptors for introspection and diagnostics.

use crate::definition::DefinitionKind;

/// Read-only summary of one registered definition.
///
/// # Examples
///
/// ```rust
/// use ferrous_faker::{ContainerBuilder, DefinitionKind};
///
/// let container = ContainerBuilder::get_default();
/// let color = container.descriptors()
///     .into_iter()
///     .find(|d| d.id == "ColorExtension")
///     .unwrap();
///
/// assert_eq!(color.kind, DefinitionKind::Deferred);
/// assert_eq!(color.type_name.as_deref(), Some("Color"));
/// assert!(!color.resolved);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionDescriptor {
    /// Identifier the definition is registered under
    pub id: String,
    /// Definition kind
    pub kind: DefinitionKind,
    /// Referenced type name, for deferred definitions
    pub type_name: Option<String>,
    /// Whether the owning container has already cached an instance
    pub resolved: bool,
}

impl DefinitionDescriptor {
    pub fn is_deferred(&self) -> bool {
        self.kind == DefinitionKind::Deferred
    }
}
