//! Builds the list of callable query methods exposed to callers.

use super::AbiDefinition;
use crate::models::method::{Argument, Method};

/// Lists the `pure`/`view` methods of `abi`, sorted by name, with their
/// ordered arguments.
///
/// Argument types are rendered in canonical form, so tuple parameters show
/// up as their expanded `(...)` type.
pub fn list_methods(abi: &AbiDefinition) -> Vec<Method> {
    abi.constant_methods()
        .map(|(name, function)| Method {
            name: name.to_string(),
            arguments: function
                .inputs
                .iter()
                .map(|input| Argument {
                    name: input.name.clone(),
                    ty: input.selector_type().into_owned(),
                })
                .collect(),
        })
        .collect()
}
