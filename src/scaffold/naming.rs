//! Derived naming set for one generation run
//!
//! Every substitutable name form is derived once, up front, from the crud
//! name and the routing options; nothing is recomputed downstream.

use inflector::Inflector;

/// All name forms derived from the crud name argument
///
/// # Examples
///
/// ```
/// # use crud_vue::scaffold::naming::CrudNames;
/// let names = CrudNames::derive("Posts", "id", Some("admin"), None);
/// assert_eq!(names.crud_name, "posts");
/// assert_eq!(names.model_name, "post");
/// assert_eq!(names.model_name_cap, "Post");
/// assert_eq!(names.vue_name, "posts");
/// assert_eq!(names.route_group, "admin/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrudNames {
    /// Lowercased crud name (`posts`)
    pub crud_name: String,
    /// Crud name argument with the first letter lowercased (`posts`)
    pub var_name: String,
    /// Word-capitalized crud name (`Posts`)
    pub crud_name_cap: String,
    /// Singular of the lowercased crud name (`post`)
    pub crud_name_singular: String,
    /// Entity name used in generated expressions: lowercase singular (`post`)
    pub model_name: String,
    /// Model name with the first letter capitalized (`Post`)
    pub model_name_cap: String,
    /// Kebab-cased crud name, used for the view directory and routes (`user-profiles`)
    pub vue_name: String,
    /// Primary-key column name (`id`)
    pub primary_key: String,
    /// Route-group prefix without a trailing slash, empty if none (`admin`)
    pub route_prefix: String,
    /// Route prefix with the first letter capitalized (`Admin`)
    pub route_prefix_cap: String,
    /// Route-group prefix with a trailing slash, empty if none (`admin/`)
    pub route_group: String,
    /// Dotted template-directory identifier (`admin/posts.posts` or `posts`)
    pub vue_template_dir: String,
}

impl CrudNames {
    /// Derive every name form from the crud name and routing options
    #[must_use]
    pub fn derive(
        name: &str,
        primary_key: &str,
        route_group: Option<&str>,
        vue_path: Option<&str>,
    ) -> Self {
        let crud_name = name.to_lowercase();
        let crud_name_cap = capitalize_words(&crud_name);
        let crud_name_singular = crud_name.to_singular();
        let model_name = crud_name_singular.clone();
        let model_name_cap = ucfirst(&model_name);
        let vue_name = name.to_kebab_case();

        let route_prefix = route_group.unwrap_or_default().to_string();
        let route_group = if route_prefix.is_empty() {
            String::new()
        } else {
            format!("{route_prefix}/")
        };
        let route_prefix_cap = ucfirst(&route_prefix);

        let vue_template_dir = vue_path.map_or_else(
            || vue_name.clone(),
            |path| format!("{path}.{vue_name}"),
        );

        Self {
            crud_name,
            var_name: lcfirst(name),
            crud_name_cap,
            crud_name_singular,
            model_name,
            model_name_cap,
            vue_name,
            primary_key: primary_key.to_string(),
            route_prefix,
            route_prefix_cap,
            route_group,
            vue_template_dir,
        }
    }
}

/// Human-readable label for a snake_case field name
///
/// ```
/// # use crud_vue::scaffold::naming::human_label;
/// assert_eq!(human_label("last_name"), "Last Name");
/// ```
#[must_use]
pub fn human_label(field_name: &str) -> String {
    field_name.to_title_case()
}

fn ucfirst(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

fn lcfirst(input: &str) -> String {
    let mut chars = input.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().collect::<String>() + chars.as_str()
    })
}

fn capitalize_words(input: &str) -> String {
    input
        .split(' ')
        .map(ucfirst)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_simple() {
        let names = CrudNames::derive("Posts", "id", None, None);
        assert_eq!(names.crud_name, "posts");
        assert_eq!(names.var_name, "posts");
        assert_eq!(names.crud_name_cap, "Posts");
        assert_eq!(names.crud_name_singular, "post");
        assert_eq!(names.model_name, "post");
        assert_eq!(names.model_name_cap, "Post");
        assert_eq!(names.vue_name, "posts");
        assert_eq!(names.primary_key, "id");
        assert_eq!(names.route_group, "");
        assert_eq!(names.vue_template_dir, "posts");
    }

    #[test]
    fn test_derive_multiword() {
        let names = CrudNames::derive("UserProfiles", "id", None, None);
        assert_eq!(names.crud_name, "userprofiles");
        assert_eq!(names.model_name, "userprofile");
        assert_eq!(names.model_name_cap, "Userprofile");
        assert_eq!(names.vue_name, "user-profiles");
    }

    #[test]
    fn test_derive_route_group() {
        let names = CrudNames::derive("posts", "id", Some("admin"), None);
        assert_eq!(names.route_prefix, "admin");
        assert_eq!(names.route_prefix_cap, "Admin");
        assert_eq!(names.route_group, "admin/");
    }

    #[test]
    fn test_derive_vue_path() {
        let names = CrudNames::derive("posts", "id", None, Some("admin/posts"));
        assert_eq!(names.vue_template_dir, "admin/posts.posts");
    }

    #[test]
    fn test_custom_primary_key() {
        let names = CrudNames::derive("posts", "post_id", None, None);
        assert_eq!(names.primary_key, "post_id");
    }

    #[test]
    fn test_human_label() {
        assert_eq!(human_label("last_name"), "Last Name");
        assert_eq!(human_label("title"), "Title");
    }
}
