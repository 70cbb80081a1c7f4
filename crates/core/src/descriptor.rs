//! Derived naming for a module.
//!
//! Every path and placeholder the generator touches is driven by the three
//! spellings computed here, so they are computed exactly once per invocation.

/// Naming derived from the raw user-supplied module name.
///
/// The raw name is normalized through snake_case first, so `BlogPost` and
/// `blog_post` produce identical descriptors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    /// StudlyCase form used for generated type names (`BlogPost`)
    pub studly: String,
    /// snake_case form used for files and Rust module paths (`blog_post`)
    pub snake: String,
    /// Pluralized snake form used as the database table name (`blog_posts`)
    pub table: String,
}

impl ModuleDescriptor {
    pub fn new(raw: &str) -> Self {
        let snake = to_snake_case(raw.trim());
        let studly = to_studly_case(&snake);
        let table = pluralize(&snake);
        Self {
            studly,
            snake,
            table,
        }
    }

    /// Fully-qualified path of the module's service provider, as it appears
    /// in the provider registry file.
    pub fn provider_path(&self) -> String {
        format!(
            "crate::modules::{}::provider::{}ServiceProvider",
            self.snake, self.studly
        )
    }

    /// Migration name fragment shared by the create and delete paths.
    pub fn migration_name(&self) -> String {
        format!("create_{}_table", self.table)
    }
}

pub fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            result.push('_');
        }
        result.push(c.to_lowercase().next().unwrap_or(c));
    }
    result
}

pub fn to_studly_case(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().collect::<String>() + &chars.collect::<String>(),
            }
        })
        .collect()
}

pub fn pluralize(word: &str) -> String {
    if word.ends_with('y') && word.len() > 1 {
        format!("{}ies", &word[..word.len() - 1])
    } else if word.ends_with('s')
        || word.ends_with("sh")
        || word.ends_with("ch")
        || word.ends_with('x')
    {
        format!("{}es", word)
    } else {
        format!("{}s", word)
    }
}
