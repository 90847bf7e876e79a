//! Name derivation for scaffolded resources
//!
//! Pure string transformations used to turn a model name such as `BlogPost`
//! into every identifier a generated resource needs: function names, URL
//! segments, directory names and page titles. All functions are total and
//! never fail; none of them know about irregular English plurals.

use serde::Serialize;

fn is_separator(c: char) -> bool {
    c == '-' || c == '_' || c.is_whitespace()
}

fn upper_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Convert to `PascalCase`
///
/// Runs of `-`, `_` and whitespace are removed and the character after each
/// run is upper-cased. The rest of every chunk is kept as written.
///
/// ```
/// use shadpanel::naming::pascal_case;
/// assert_eq!(pascal_case("blog_post"), "BlogPost");
/// assert_eq!(pascal_case("invoice-line item"), "InvoiceLineItem");
/// ```
pub fn pascal_case(s: &str) -> String {
    s.split(is_separator)
        .filter(|chunk| !chunk.is_empty())
        .map(upper_first)
        .collect()
}

/// Convert to `kebab-case`
///
/// A hyphen is inserted at every lowercase-to-uppercase boundary, separator
/// runs collapse to a single hyphen and the result is lower-cased. Separators
/// at either end are dropped so the result is a clean path segment.
pub fn kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    let mut pending_sep = false;
    for c in s.chars() {
        if is_separator(c) {
            pending_sep = true;
            continue;
        }
        if pending_sep {
            if !out.is_empty() {
                out.push('-');
            }
            pending_sep = false;
        } else if matches!(prev, Some(p) if p.is_lowercase()) && c.is_uppercase() {
            out.push('-');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// Drop a trailing `s`
///
/// Words ending in `ss` (`class`, `address`) are left alone so that applying
/// the function twice never strips a second character.
pub fn singularize(s: &str) -> String {
    if s.len() > 1 && s.ends_with('s') && !s.ends_with("ss") {
        s[..s.len() - 1].to_string()
    } else {
        s.to_string()
    }
}

/// Append `s` unless the word already ends in `s`
pub fn pluralize(s: &str) -> String {
    if s.ends_with('s') {
        s.to_string()
    } else {
        format!("{s}s")
    }
}

/// Turn an identifier into a label: `createdAt` becomes `Created At`
///
/// Hyphens and underscores become spaces, a space is inserted at every
/// lowercase-to-uppercase boundary and only the very first character is
/// upper-cased.
pub fn humanize(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for c in s.chars() {
        if c == '-' || c == '_' {
            out.push(' ');
        } else {
            if matches!(prev, Some(p) if p.is_lowercase()) && c.is_uppercase() {
                out.push(' ');
            }
            out.push(c);
        }
        prev = Some(c);
    }
    upper_first(&out)
}

/// `Invoice` → `invoice`, `BlogPost` → `blogPost`
///
/// This is the form Prisma uses for client delegates (`prisma.blogPost`).
pub fn lower_camel(s: &str) -> String {
    lower_first(&pascal_case(s))
}

/// Every name a generated resource needs, derived from one input string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdentity {
    /// `invoice`, `blogPost`
    pub singular: String,
    /// `invoices`, `blogPosts`
    pub plural: String,
    /// `Invoice`, `BlogPost`
    pub pascal_identifier: String,
    /// Directory and URL segment: `invoices`, `blog-posts`
    pub kebab_path: String,
    /// Page title: `Invoices`, `Blog Posts`
    pub human_label: String,
}

impl ResourceIdentity {
    /// Derive the identity from a model or resource name
    ///
    /// The input may be singular or plural and in any casing style; deriving
    /// again from any of the produced forms yields the same identity.
    pub fn derive(name: &str) -> Self {
        let pascal_identifier = pascal_case(&singularize(name.trim()));
        let singular = lower_first(&pascal_identifier);
        let plural = pluralize(&singular);
        let kebab_path = kebab_case(&plural);
        let human_label = humanize(&plural);
        ResourceIdentity {
            singular,
            plural,
            pascal_identifier,
            kebab_path,
            human_label,
        }
    }

    /// `Invoices`, `BlogPosts`; used for the retrieve-many routine and page component
    pub fn pascal_plural(&self) -> String {
        pascal_case(&self.plural)
    }

    /// Singular label for buttons and messages: `Invoice`, `Blog Post`
    pub fn human_singular(&self) -> String {
        humanize(&self.singular)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("invoice"), "Invoice");
        assert_eq!(pascal_case("blog_post"), "BlogPost");
        assert_eq!(pascal_case("blog-post"), "BlogPost");
        assert_eq!(pascal_case("blog  post"), "BlogPost");
        assert_eq!(pascal_case("blogPost"), "BlogPost");
        assert_eq!(pascal_case("_leading"), "Leading");
        assert_eq!(pascal_case(""), "");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(kebab_case("blogPosts"), "blog-posts");
        assert_eq!(kebab_case("BlogPosts"), "blog-posts");
        assert_eq!(kebab_case("invoice_lines"), "invoice-lines");
        assert_eq!(kebab_case("line  items"), "line-items");
        assert_eq!(kebab_case("a--b"), "a-b");
        assert_eq!(kebab_case("invoices"), "invoices");
        assert_eq!(kebab_case("HTTPStatus"), "httpstatus");
    }

    #[test]
    fn test_kebab_case_trims_both_ends() {
        assert_eq!(kebab_case("invoice_"), "invoice");
        assert_eq!(kebab_case("_invoice"), "invoice");
        assert_eq!(kebab_case(" _line items_ "), "line-items");
        assert_eq!(kebab_case("__"), "");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("posts"), "post");
        assert_eq!(singularize("post"), "post");
        assert_eq!(singularize("s"), "s");
        assert_eq!(singularize(""), "");
        assert_eq!(singularize("class"), "class");
        // known limitation, kept on purpose
        assert_eq!(singularize("status"), "statu");
    }

    #[test]
    fn test_singularize_is_idempotent() {
        for word in ["posts", "class", "status", "s", "ss", "bus", "invoices", "glasses", ""] {
            let once = singularize(word);
            assert_eq!(singularize(&once), once, "input {word:?}");
        }
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("post"), "posts");
        assert_eq!(pluralize("posts"), "posts");
        assert_eq!(pluralize(""), "s");
    }

    #[test]
    fn test_singular_plural_round_trip() {
        for word in ["post", "invoice", "blogPost", "child", "x"] {
            assert_eq!(singularize(&pluralize(word)), word);
        }
        for word in ["posts", "post", "class", "status", "s"] {
            let once = pluralize(&singularize(word));
            assert_eq!(pluralize(&singularize(&once)), once, "input {word:?}");
        }
    }

    #[test]
    fn test_humanize() {
        assert_eq!(humanize("createdAt"), "Created At");
        assert_eq!(humanize("first_name"), "First name");
        assert_eq!(humanize("blog-posts"), "Blog posts");
        assert_eq!(humanize("invoices"), "Invoices");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_lower_camel() {
        assert_eq!(lower_camel("Invoice"), "invoice");
        assert_eq!(lower_camel("BlogPost"), "blogPost");
        assert_eq!(lower_camel("blog_post"), "blogPost");
    }

    #[test]
    fn test_identity_for_invoice() {
        let id = ResourceIdentity::derive("invoice");
        assert_eq!(
            id,
            ResourceIdentity {
                singular: "invoice".into(),
                plural: "invoices".into(),
                pascal_identifier: "Invoice".into(),
                kebab_path: "invoices".into(),
                human_label: "Invoices".into(),
            }
        );
        assert_eq!(ResourceIdentity::derive("Invoice"), id);
        assert_eq!(ResourceIdentity::derive("invoices"), id);
        assert_eq!(id.pascal_plural(), "Invoices");
    }

    #[test]
    fn test_identity_for_compound_name() {
        let id = ResourceIdentity::derive("BlogPost");
        assert_eq!(id.singular, "blogPost");
        assert_eq!(id.plural, "blogPosts");
        assert_eq!(id.kebab_path, "blog-posts");
        assert_eq!(id.human_label, "Blog Posts");
        assert_eq!(id.human_singular(), "Blog Post");
    }

    #[test]
    fn test_identity_rederivation_is_stable() {
        for name in ["BlogPost", "invoice", "line_items", "Category", "status"] {
            let id = ResourceIdentity::derive(name);
            for form in [
                &id.singular,
                &id.plural,
                &id.pascal_identifier,
                &id.kebab_path,
                &id.human_label,
            ] {
                assert_eq!(ResourceIdentity::derive(form), id, "{name} via {form}");
            }
        }
    }
}
