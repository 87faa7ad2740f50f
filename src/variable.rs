//! Variable tags and their substitution.
//!
//! A live tag is written `{: name :}` and is replaced by the variable's value.
//! An escaped tag is written `{\: name :}`; it is left alone and finally
//! unescaped to `{: name :}`.

use crate::error::Result;
use crate::prompt::Prompter;
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use std::sync::LazyLock;

/// Variable name to value, shared by every substitution of one run.
pub type VariableMap = IndexMap<String, String>;

static VARIABLE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{:\s*([A-Za-z0-9_-]+)\s*:\}").expect("variable tag pattern is valid")
});

const ESCAPED_OPENING: &str = "{\\:";
const OPENING: &str = "{:";

/// Builds a variable map from `key=value` arguments.
///
/// Arguments are split at the first `=`; anything without one is ignored.
pub fn map_from_args<I, S>(args: I) -> VariableMap
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .filter_map(|arg| {
            arg.as_ref()
                .split_once('=')
                .map(|(key, value)| (key.to_string(), value.to_string()))
        })
        .collect()
}

/// Resolves variable tags, asking the [`Prompter`] for values that are missing.
pub struct Populator<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> Populator<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Returns `text` with every live tag replaced and every escaped tag unescaped.
    ///
    /// Values obtained from the prompter are stored in `vars`, so each missing
    /// variable is asked for once per map. A prompt failure aborts immediately
    /// and leaves that variable unset.
    ///
    /// Any whitespace may pad the name inside a tag, line breaks and tabs included.
    pub fn populate(&self, text: &str, vars: &mut VariableMap) -> Result<String> {
        let mut resolved = text.to_string();

        // Substitution can shift offsets, so every pass scans from the start
        while let Some(captures) = VARIABLE_TAG.captures(&resolved) {
            let (Some(tag), Some(name)) = (captures.get(0), captures.get(1)) else {
                break;
            };
            let range = tag.range();
            let name = name.as_str().to_string();

            let value = match vars.get(&name) {
                Some(value) => value.clone(),
                None => {
                    debug!("Variable '{name}' was not provided, prompting for it");
                    let value = self.prompter.prompt_variable(&name)?;
                    vars.insert(name, value.clone());
                    value
                }
            };

            resolved.replace_range(range, &value);
        }

        Ok(resolved.replace(ESCAPED_OPENING, OPENING))
    }
}
