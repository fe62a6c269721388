//! # Resolution Request
//!
//! The inputs of one template-value resolution.

use crate::naming::ModelNames;

/// The parent a nested resource hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentModel {
    /// Derived naming variants (`post`, `posts`, `Post`, `Posts`).
    pub names: ModelNames,
    /// The name as given by the user, used verbatim for the schema lookup.
    pub raw_name: String,
}

/// Everything needed to resolve the values for one resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolutionRequest {
    /// Optional route context the resource lives under (e.g. `admin`).
    pub context: Option<String>,
    /// The resource being generated.
    pub model: ModelNames,
    /// The parent model, if the resource is nested.
    pub parent: Option<ParentModel>,
    /// Extra argument tokens (`name` or `name:type`), in order.
    pub extra_args: Vec<String>,
}

impl ResolutionRequest {
    /// Request for the resource named `model`, with no parent, context or extra args.
    pub fn new(model: &str) -> Self {
        Self {
            context: None,
            model: ModelNames::derive(model),
            parent: None,
            extra_args: Vec::new(),
        }
    }

    /// Nests the resource under `raw_name`. A blank name means "no parent".
    pub fn with_parent(mut self, raw_name: &str) -> Self {
        let raw_name = raw_name.trim();
        self.parent = (!raw_name.is_empty()).then(|| ParentModel {
            names: ModelNames::derive(raw_name),
            raw_name: raw_name.to_string(),
        });
        self
    }

    /// Places the resource under a route context.
    pub fn with_context(mut self, context: &str) -> Self {
        self.context = Some(context.to_string()).filter(|c| !c.is_empty());
        self
    }

    /// Sets the extra argument tokens.
    pub fn with_extra_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_args = args.into_iter().map(Into::into).collect();
        self
    }
}
