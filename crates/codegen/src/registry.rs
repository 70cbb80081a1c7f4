//! Structural edits on the provider registry file.
//!
//! The registry is a Rust source file whose payload is a single
//! `pub const PROVIDERS: &[&str] = &[ ... ];` array literal with one quoted
//! fully-qualified provider path per line. It is parsed into header, entry
//! lines and footer; add/remove operate on the parsed entries and untouched
//! lines are written back byte-for-byte, so the file can never end up with a
//! dangling comma or a malformed array.

use modkit_core::ScaffoldError;

/// Content written when the registry file is created from scratch.
pub const EMPTY_REGISTRY: &str = "\
//! Module service providers registered with the application.

pub const PROVIDERS: &[&str] = &[
];
";

const ENTRY_INDENT: &str = "    ";

/// Parsed form of the registry file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    /// Everything up to and including the array-opening line
    header: Vec<String>,
    /// Raw entry lines between the brackets, preserved verbatim
    entries: Vec<String>,
    /// Everything from the closing `];` line on
    footer: Vec<String>,
}

impl ProviderRegistry {
    pub fn parse(content: &str) -> Result<Self, ScaffoldError> {
        let lines: Vec<&str> = content.lines().collect();

        let open = lines
            .iter()
            .position(|line| line.trim_end().ends_with("= &["))
            .ok_or_else(|| ScaffoldError::validation("registry file has no provider array"))?;
        let close = lines
            .iter()
            .skip(open + 1)
            .position(|line| line.trim() == "];")
            .map(|offset| open + 1 + offset)
            .ok_or_else(|| {
                ScaffoldError::validation("registry file's provider array is never closed")
            })?;

        Ok(Self {
            header: lines[..=open].iter().map(|s| s.to_string()).collect(),
            entries: lines[open + 1..close].iter().map(|s| s.to_string()).collect(),
            footer: lines[close..].iter().map(|s| s.to_string()).collect(),
        })
    }

    /// Provider paths currently registered, in file order.
    pub fn providers(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|line| entry_value(line))
            .collect()
    }

    pub fn contains(&self, provider: &str) -> bool {
        self.entries
            .iter()
            .any(|line| entry_value(line) == Some(provider))
    }

    /// Append a provider before the closing bracket. Returns `false` and
    /// leaves the document untouched when it is already registered.
    pub fn add(&mut self, provider: &str) -> bool {
        if self.contains(provider) {
            return false;
        }
        self.entries
            .push(format!("{}\"{}\",", ENTRY_INDENT, provider));
        true
    }

    /// Remove exactly one occurrence of a provider. Returns `false` when it
    /// was not registered.
    pub fn remove(&mut self, provider: &str) -> bool {
        match self
            .entries
            .iter()
            .position(|line| entry_value(line) == Some(provider))
        {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn to_file_string(&self) -> String {
        let mut out = String::new();
        for line in self
            .header
            .iter()
            .chain(self.entries.iter())
            .chain(self.footer.iter())
        {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// Provider path carried by one entry line, if any. Blank lines and comments
/// inside the array yield `None` and are preserved untouched.
fn entry_value(line: &str) -> Option<&str> {
    let trimmed = line.trim().trim_end_matches(',');
    let unquoted = trimmed.strip_prefix('"')?.strip_suffix('"')?;
    (!unquoted.is_empty()).then_some(unquoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROVIDER: &str = "crate::modules::post::provider::PostServiceProvider";

    #[test]
    fn empty_registry_round_trips() {
        let registry = ProviderRegistry::parse(EMPTY_REGISTRY).unwrap();
        assert_eq!(registry.to_file_string(), EMPTY_REGISTRY);
        assert!(registry.providers().is_empty());
    }

    #[test]
    fn add_is_idempotent() {
        let mut registry = ProviderRegistry::parse(EMPTY_REGISTRY).unwrap();
        assert!(registry.add(PROVIDER));
        let after_first = registry.to_file_string();

        assert!(!registry.add(PROVIDER));
        assert_eq!(registry.to_file_string(), after_first);
    }

    #[test]
    fn add_then_remove_restores_original_content() {
        let mut registry = ProviderRegistry::parse(EMPTY_REGISTRY).unwrap();
        registry.add(PROVIDER);
        assert!(registry.remove(PROVIDER));
        assert_eq!(registry.to_file_string(), EMPTY_REGISTRY);
    }

    #[test]
    fn existing_entries_are_preserved_verbatim() {
        let content = "\
//! Module service providers registered with the application.

pub const PROVIDERS: &[&str] = &[
    \"crate::modules::user::provider::UserServiceProvider\",
];
";
        let mut registry = ProviderRegistry::parse(content).unwrap();
        registry.add(PROVIDER);
        registry.remove(PROVIDER);
        assert_eq!(registry.to_file_string(), content);
    }

    #[test]
    fn remove_missing_provider_reports_false() {
        let mut registry = ProviderRegistry::parse(EMPTY_REGISTRY).unwrap();
        assert!(!registry.remove(PROVIDER));
        assert_eq!(registry.to_file_string(), EMPTY_REGISTRY);
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(ProviderRegistry::parse("fn main() {}").is_err());
        assert!(ProviderRegistry::parse("pub const PROVIDERS: &[&str] = &[\n").is_err());
    }
}
