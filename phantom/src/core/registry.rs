//! Explicit capability registry keyed by namespace tag.
//!
//! Populated once at startup by [`crate::plugin`]; scripts reach a capability
//! only through an explicit `(namespace, name)` lookup.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::capability::{CallError, Capability};

#[derive(Default)]
pub struct Registry {
    namespaces: BTreeMap<String, BTreeMap<String, Arc<dyn Capability>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `capability` as `namespace.name`.
    ///
    /// Returns the capability previously bound to that name, if any.
    pub fn register(
        &mut self,
        namespace: &str,
        name: &str,
        capability: Arc<dyn Capability>,
    ) -> Option<Arc<dyn Capability>> {
        self.namespaces
            .entry(namespace.to_string())
            .or_default()
            .insert(name.to_string(), capability)
    }

    pub fn lookup(&self, namespace: &str, name: &str) -> Option<&Arc<dyn Capability>> {
        self.namespaces.get(namespace)?.get(name)
    }

    /// Invoke `namespace.name` with script arguments.
    pub fn call(&self, namespace: &str, name: &str, args: &[Value]) -> Result<Value, CallError> {
        let capabilities = self
            .namespaces
            .get(namespace)
            .ok_or_else(|| CallError::UnknownNamespace(namespace.to_string()))?;
        let capability = capabilities
            .get(name)
            .ok_or_else(|| CallError::UnknownCapability {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })?;
        capability.invoke(args)
    }

    /// Qualified `Namespace.name` entries in lexicographic order.
    pub fn names(&self) -> Vec<String> {
        self.namespaces
            .iter()
            .flat_map(|(namespace, capabilities)| {
                capabilities
                    .keys()
                    .map(move |name| format!("{namespace}.{name}"))
            })
            .collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("capabilities", &self.names())
            .finish()
    }
}
