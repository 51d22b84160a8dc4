use super::EnvError;
use indexmap::IndexMap;

/// Session-local variable bindings, kept in first-assignment order.
#[derive(Clone, Debug, Default)]
pub struct VariableStore {
    vars: IndexMap<String, String>,
}

impl VariableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a `NAME=VALUE` token.
    ///
    /// The token must hold exactly one `=` with something on both sides. The name is
    /// kept verbatim, `$` included, since lookups use the whole token as the key.
    /// Reassigning a name overwrites the value in place.
    pub fn assign(&mut self, raw: &str) -> Result<(), EnvError> {
        let (name, value) = Self::split_assignment(raw)?;

        match self.vars.insert(name.to_string(), value.to_string()) {
            Some(old) => tracing::debug!(name, old, value, "variable reassigned"),
            None => tracing::debug!(name, value, "variable assigned"),
        }
        Ok(())
    }

    /// Value bound to `token`, if the token is marked with `$` and names a binding.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        if !token.contains('$') {
            return None;
        }
        self.get(token)
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn split_assignment(raw: &str) -> Result<(&str, &str), EnvError> {
        let malformed = || EnvError::MalformedAssignment(raw.to_string());

        let (name, value) = raw.split_once('=').ok_or_else(malformed)?;
        if name.is_empty() || value.is_empty() || value.contains('=') {
            return Err(malformed());
        }

        Ok((name, value))
    }
}
