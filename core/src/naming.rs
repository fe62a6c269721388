#![deny(missing_docs)]

//! # Naming Utilities
//!
//! Pure string transforms used to derive the identifier, route-param and path
//! variants of a model name, plus the singular/plural/capitalized variants a
//! resource template needs.

use heck::{ToKebabCase, ToLowerCamelCase, ToUpperCamelCase};

/// Words whose plural does not follow the suffix rules.
const IRREGULAR: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("mouse", "mice"),
    ("goose", "geese"),
    ("foot", "feet"),
    ("tooth", "teeth"),
    ("ox", "oxen"),
    ("criterion", "criteria"),
    ("knife", "knives"),
    ("wife", "wives"),
    ("life", "lives"),
    ("leaf", "leaves"),
    ("wolf", "wolves"),
    ("half", "halves"),
    ("shelf", "shelves"),
];

/// Words with identical singular and plural forms.
const UNCOUNTABLE: &[&str] = &[
    "data",
    "equipment",
    "feedback",
    "fish",
    "information",
    "media",
    "metadata",
    "news",
    "series",
    "sheep",
    "species",
];

/// Singular words that end in `s`; their plural adds `-es`.
const SINGULAR_ENDING_IN_S: &[&str] = &[
    "alias", "atlas", "bias", "canvas", "gas", "lens", "pancreas",
];

/// The four naming variants of a model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelNames {
    /// Singular lower camel case, e.g. `blogPost`.
    pub name: String,
    /// Plural lower camel case, e.g. `blogPosts`.
    pub names: String,
    /// Singular upper camel case, e.g. `BlogPost`.
    pub capitalized: String,
    /// Plural upper camel case, e.g. `BlogPosts`.
    pub capitalized_plural: String,
}

impl ModelNames {
    /// Derives all variants from user input in any case or number
    /// (`blog-posts`, `BlogPost`, `blog_post` all give `blogPost`).
    pub fn derive(input: &str) -> Self {
        let name = singularize(&input.to_lower_camel_case());
        let names = pluralize(&name);
        Self {
            capitalized: name.to_upper_camel_case(),
            capitalized_plural: names.to_upper_camel_case(),
            name,
            names,
        }
    }
}

/// `post` -> `postId`. Empty input stays empty.
pub fn derive_id(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    format!("{}Id", input)
}

/// `postId` -> `[postId]` (the dynamic route segment form). Empty input stays empty.
pub fn derive_param(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    format!("[{}]", input)
}

/// Builds the route directory for a resource: `admin` + `blogPosts` -> `admin/blog-posts`.
pub fn derive_model_names_path(context: Option<&str>, model_names: &str) -> String {
    let names = model_names.to_kebab_case();
    match context.filter(|c| !c.is_empty()) {
        Some(ctx) => format!("{}/{}", ctx.to_kebab_case(), names),
        None => names,
    }
}

/// Pluralizes the last word of a camel case identifier.
pub fn pluralize(word: &str) -> String {
    inflect_last_word(word, pluralize_word)
}

/// Singularizes the last word of a camel case identifier.
pub fn singularize(word: &str) -> String {
    inflect_last_word(word, singularize_word)
}

/// Applies `rule` to the trailing word of a camel case identifier, keeping the
/// case of that word's first letter.
fn inflect_last_word(word: &str, rule: fn(&str) -> String) -> String {
    let split = word
        .char_indices()
        .filter(|(_, c)| c.is_uppercase())
        .map(|(i, _)| i)
        .last()
        .unwrap_or(0);
    let (head, tail) = word.split_at(split);
    if tail.is_empty() {
        return word.to_string();
    }

    let inflected = rule(&tail.to_lowercase());
    let capitalize = tail.chars().next().is_some_and(char::is_uppercase);

    let mut out = String::with_capacity(word.len() + 3);
    out.push_str(head);
    if capitalize {
        let mut chars = inflected.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
        }
    } else {
        out.push_str(&inflected);
    }
    out
}

fn pluralize_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((_, plural)) = IRREGULAR.iter().find(|(s, p)| *s == word || *p == word) {
        return plural.to_string();
    }
    if SINGULAR_ENDING_IN_S.contains(&word) {
        return format!("{}es", word);
    }
    if let Some(stem) = word.strip_suffix('y') {
        if !stem.ends_with(['a', 'e', 'i', 'o', 'u']) && !stem.is_empty() {
            return format!("{}ies", stem);
        }
    }
    if word.ends_with(['s', 'x', 'z']) || word.ends_with("ch") || word.ends_with("sh") {
        // already plural in the common `-s` case
        if word.ends_with('s') && !word.ends_with("ss") && !word.ends_with("us") {
            return word.to_string();
        }
        return format!("{}es", word);
    }
    format!("{}s", word)
}

fn singularize_word(word: &str) -> String {
    if UNCOUNTABLE.contains(&word) {
        return word.to_string();
    }
    if let Some((singular, _)) = IRREGULAR.iter().find(|(s, p)| *p == word || *s == word) {
        return singular.to_string();
    }
    if let Some(singular) = SINGULAR_ENDING_IN_S
        .iter()
        .find(|s| **s == word || word.strip_suffix("es") == Some(**s))
    {
        return singular.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{}y", stem);
        }
    }
    for suffix in ["sses", "shes", "ches", "xes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    // `statuses` -> `status`, but `houses` -> `house`
    if let Some(stem) = word.strip_suffix("uses") {
        if !stem.is_empty() && !stem.ends_with(['a', 'e', 'i', 'o', 'u']) {
            return format!("{}us", stem);
        }
    }
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => word.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_id_and_param() {
        assert_eq!(derive_id("post"), "postId");
        assert_eq!(derive_param(&derive_id("post")), "[postId]");
        assert_eq!(derive_id(""), "");
        assert_eq!(derive_param(""), "");
    }

    #[test]
    fn test_model_names_path() {
        assert_eq!(derive_model_names_path(None, "blogPosts"), "blog-posts");
        assert_eq!(
            derive_model_names_path(Some("adminArea"), "blogPosts"),
            "admin-area/blog-posts"
        );
        assert_eq!(derive_model_names_path(Some(""), "posts"), "posts");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("key"), "keys");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("address"), "addresses");
        assert_eq!(pluralize("person"), "people");
        assert_eq!(pluralize("blogPerson"), "blogPeople");
        assert_eq!(pluralize("BlogPost"), "BlogPosts");
        assert_eq!(pluralize("news"), "news");
        assert_eq!(pluralize("knife"), "knives");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("addresses"), "address");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("status"), "status");
        assert_eq!(singularize("statuses"), "status");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("blogPosts"), "blogPost");
        assert_eq!(singularize("wolves"), "wolf");
        assert_eq!(singularize("houses"), "house");
        assert_eq!(singularize("sizes"), "size");
    }

    #[test]
    fn test_singular_words_ending_in_s() {
        let cases = [
            ("canvas", "canvas", "canvases"),
            ("canvases", "canvas", "canvases"),
            ("alias", "alias", "aliases"),
            ("atlas", "atlas", "atlases"),
            ("lens", "lens", "lenses"),
            ("lenses", "lens", "lenses"),
            ("bias", "bias", "biases"),
            ("ideas", "idea", "ideas"),
            ("areas", "area", "areas"),
            ("schemas", "schema", "schemas"),
        ];
        for (input, singular, plural) in cases {
            assert_eq!(singularize(input), singular, "singular of {}", input);
            assert_eq!(pluralize(singular), plural, "plural of {}", singular);
        }
        assert_eq!(singularize("photoCanvases"), "photoCanvas");
    }

    #[test]
    fn test_model_names_keep_trailing_s() {
        let names = ModelNames::derive("Canvas");
        assert_eq!(names.name, "canvas");
        assert_eq!(names.names, "canvases");
        assert_eq!(names.capitalized, "Canvas");
        assert_eq!(names.capitalized_plural, "Canvases");
        assert_eq!(derive_id(&names.name), "canvasId");

        assert_eq!(ModelNames::derive("Alias").name, "alias");
        assert_eq!(ModelNames::derive("Atlas").name, "atlas");
        assert_eq!(ModelNames::derive("Lens").name, "lens");
    }

    #[test]
    fn test_model_names_derive() {
        let names = ModelNames::derive("blog-posts");
        assert_eq!(names.name, "blogPost");
        assert_eq!(names.names, "blogPosts");
        assert_eq!(names.capitalized, "BlogPost");
        assert_eq!(names.capitalized_plural, "BlogPosts");

        let names = ModelNames::derive("Category");
        assert_eq!(names.name, "category");
        assert_eq!(names.names, "categories");
        assert_eq!(names.capitalized_plural, "Categories");
    }
}
