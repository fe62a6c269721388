//! # Template Values
//!
//! The resolved record handed to the renderer. Serializes to the flat
//! camelCase map the resource templates are written against.

use crate::fields::FieldTemplateValue;
use crate::naming::{derive_id, derive_model_names_path, derive_param};
use crate::resolver::request::ResolutionRequest;
use derive_more::Display;
use serde::{Serialize, Serializer};

/// Token `modelIdZodType` holds until an `id:<type>` argument says otherwise.
pub const DEFAULT_MODEL_ID_ZOD_TYPE: &str = "number";

/// Outcome of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A validation-type token was found.
    Resolved(String),
    /// Nothing usable was found; the reason says why.
    Unresolved(UnresolvedReason),
}

impl Resolution {
    /// Shorthand for `Resolved`.
    pub fn resolved(token: impl Into<String>) -> Self {
        Resolution::Resolved(token.into())
    }

    /// The token, if resolved.
    pub fn token(&self) -> Option<&str> {
        match self {
            Resolution::Resolved(token) => Some(token),
            Resolution::Unresolved(_) => None,
        }
    }

    /// The reason, if unresolved.
    pub fn reason(&self) -> Option<&UnresolvedReason> {
        match self {
            Resolution::Resolved(_) => None,
            Resolution::Unresolved(reason) => Some(reason),
        }
    }
}

/// Serializes as the token, or `null` when unresolved.
impl Serialize for Resolution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.token() {
            Some(token) => serializer.serialize_str(token),
            None => serializer.serialize_none(),
        }
    }
}

/// Why a lookup produced no token.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum UnresolvedReason {
    /// `id` was given without a `:type` part.
    #[display("no type given for `id`")]
    MissingTypeName,

    /// The type-mapping table does not know the type.
    #[display("unknown type `{_0}`")]
    UnknownType(String),

    /// No model with that name exists in the schema.
    #[display("model `{_0}` was not found in the schema")]
    ParentModelNotFound(String),

    /// The model exists but no field carries `@id`.
    #[display("model `{_0}` has no field marked @id")]
    PrimaryKeyNotFound(String),

    /// The primary key's type has no validation-type mapping.
    #[display("primary key `{model}.{field}` has unsupported type `{field_type}`")]
    UnsupportedKeyType {
        /// Model name.
        model: String,
        /// Primary-key field name.
        field: String,
        /// Declared type.
        field_type: String,
    },
}

/// The values a resource template is rendered with.
///
/// Base naming keys are always present. `parentModelIdZodType` is emitted
/// only for a resolved parent key and `fieldTemplateValues` only when
/// ordinary field arguments were given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateValues {
    /// `postId`
    pub parent_model_id: String,
    /// `None` when there is no parent; see [`Resolution`] otherwise.
    #[serde(skip_serializing_if = "parent_key_unresolved")]
    pub parent_model_id_zod_type: Option<Resolution>,
    /// `[postId]`
    pub parent_model_param: String,
    /// `post`
    pub parent_model: String,
    /// `posts`
    pub parent_models: String,
    /// `Post`
    #[serde(rename = "ParentModel")]
    pub parent_model_capitalized: String,
    /// `Posts`
    #[serde(rename = "ParentModels")]
    pub parent_models_capitalized: String,
    /// `commentId`
    pub model_id: String,
    /// Starts as `number`; overwritten by an `id:<type>` argument.
    pub model_id_zod_type: Resolution,
    /// `[commentId]`
    pub model_id_param: String,
    /// `comment`
    pub model_name: String,
    /// `comments`
    pub model_names: String,
    /// `Comment`
    #[serde(rename = "ModelName")]
    pub model_name_capitalized: String,
    /// `Comments`
    #[serde(rename = "ModelNames")]
    pub model_names_capitalized: String,
    /// `admin/comments`
    pub model_names_path: String,
    /// One entry per ordinary field argument.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_template_values: Option<Vec<FieldTemplateValue>>,
}

fn parent_key_unresolved(value: &Option<Resolution>) -> bool {
    !matches!(value, Some(Resolution::Resolved(_)))
}

impl TemplateValues {
    /// The unconditional values derived from the request's names alone.
    pub fn base(request: &ResolutionRequest) -> Self {
        let parent = request.parent.as_ref().map(|p| &p.names);
        let parent_name = parent.map(|p| p.name.as_str()).unwrap_or_default();
        let parent_model_id = derive_id(parent_name);
        let model_id = derive_id(&request.model.name);

        Self {
            parent_model_param: derive_param(&parent_model_id),
            parent_model_id,
            parent_model_id_zod_type: None,
            parent_model: parent_name.to_string(),
            parent_models: parent.map(|p| p.names.clone()).unwrap_or_default(),
            parent_model_capitalized: parent.map(|p| p.capitalized.clone()).unwrap_or_default(),
            parent_models_capitalized: parent
                .map(|p| p.capitalized_plural.clone())
                .unwrap_or_default(),
            model_id_param: derive_param(&model_id),
            model_id,
            model_id_zod_type: Resolution::resolved(DEFAULT_MODEL_ID_ZOD_TYPE),
            model_name: request.model.name.clone(),
            model_names: request.model.names.clone(),
            model_name_capitalized: request.model.capitalized.clone(),
            model_names_capitalized: request.model.capitalized_plural.clone(),
            model_names_path: derive_model_names_path(
                request.context.as_deref(),
                &request.model.names,
            ),
            field_template_values: None,
        }
    }

    /// Template keys whose lookup came back unresolved, with the reason.
    pub fn unresolved(&self) -> Vec<(&'static str, &UnresolvedReason)> {
        let mut out = Vec::new();
        if let Some(reason) = self.model_id_zod_type.reason() {
            out.push(("modelIdZodType", reason));
        }
        if let Some(reason) = self
            .parent_model_id_zod_type
            .as_ref()
            .and_then(Resolution::reason)
        {
            out.push(("parentModelIdZodType", reason));
        }
        out
    }
}
