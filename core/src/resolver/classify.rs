//! # Argument Classification
//!
//! Splits extra arguments into special ones, which steer resolution, and
//! ordinary field arguments, which are rendered as fields.

use crate::error::AppResult;
use crate::resolver::values::{Resolution, UnresolvedReason};
use crate::type_mapping::ValidationTypeLookup;

/// Value-name of the argument that declares the model's id type.
pub const ID_ARG: &str = "id";

/// Value-name of the argument that declares a parent relation.
pub const BELONGS_TO_ARG: &str = "belongsTo";

/// Splits `name:type` into `(name, type)`; the type is empty when absent.
/// Anything after a second `:` is left to the field builder.
pub fn split_arg(arg: &str) -> (&str, &str) {
    let mut parts = arg.split(':');
    let value_name = parts.next().unwrap_or_default();
    let type_name = parts.next().unwrap_or_default();
    (value_name, type_name)
}

/// Whether the argument's value-name is one of the special names.
pub fn is_special(arg: &str) -> bool {
    matches!(split_arg(arg).0, ID_ARG | BELONGS_TO_ARG)
}

/// A consumed special argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecialArg {
    /// `id:<type>` and the token its type resolved to.
    Id {
        /// The type part as written.
        type_name: String,
        /// Lookup outcome.
        zod_type: Resolution,
    },
    /// `belongsTo:<model>`. Consumed only; nothing is generated from it.
    BelongsTo {
        /// The type part as written (the related model).
        target: String,
    },
}

/// Result of classifying an argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedArgs {
    /// Special arguments in argument order.
    pub special: Vec<SpecialArg>,
    /// Ordinary arguments in argument order.
    pub ordinary: Vec<String>,
}

impl ClassifiedArgs {
    /// The id type from the last `id` argument, if any was given.
    pub fn model_id_zod_type(&self) -> Option<&Resolution> {
        self.special.iter().rev().find_map(|arg| match arg {
            SpecialArg::Id { zod_type, .. } => Some(zod_type),
            SpecialArg::BelongsTo { .. } => None,
        })
    }
}

/// Classifies `args`, resolving the type of every `id` argument through `lookup`.
///
/// # Errors
///
/// Only a failing `lookup` aborts classification. Unknown or missing id types
/// are recorded as [`Resolution::Unresolved`].
pub fn classify_args<L>(args: &[String], lookup: &L) -> AppResult<ClassifiedArgs>
where
    L: ValidationTypeLookup + ?Sized,
{
    let mut classified = ClassifiedArgs::default();

    for arg in args {
        if !is_special(arg) {
            classified.ordinary.push(arg.clone());
            continue;
        }

        let (value_name, type_name) = split_arg(arg);
        if value_name == ID_ARG {
            let zod_type = resolve_id_type(type_name, lookup)?;
            tracing::debug!(arg = %arg, ?zod_type, "id argument");
            classified.special.push(SpecialArg::Id {
                type_name: type_name.to_string(),
                zod_type,
            });
        } else {
            // TODO: emit the parent-id field and reuse the parent key lookup once
            // relation scaffolding for `belongsTo` is specified.
            tracing::warn!(
                arg = %arg,
                "`belongsTo` is accepted but no relation field is generated for it"
            );
            classified.special.push(SpecialArg::BelongsTo {
                target: type_name.to_string(),
            });
        }
    }

    Ok(classified)
}

fn resolve_id_type<L>(type_name: &str, lookup: &L) -> AppResult<Resolution>
where
    L: ValidationTypeLookup + ?Sized,
{
    if type_name.is_empty() {
        return Ok(Resolution::Unresolved(UnresolvedReason::MissingTypeName));
    }
    Ok(match lookup.resolve_validation_type(type_name)? {
        Some(token) => Resolution::Resolved(token),
        None => Resolution::Unresolved(UnresolvedReason::UnknownType(type_name.to_string())),
    })
}
