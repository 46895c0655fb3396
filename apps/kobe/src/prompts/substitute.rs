use thiserror::Error;

/// The one substitution point every persona template carries.
pub const CONTEXT_PLACEHOLDER: &str = "{context}";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    #[error("Template '{template}' has no {placeholder} placeholder")]
    MissingPlaceholder {
        template: &'static str,
        placeholder: &'static str,
    },

    #[error("Template '{template}' has {count} {placeholder} placeholders; expected exactly one")]
    AmbiguousPlaceholder {
        template: &'static str,
        placeholder: &'static str,
        count: usize,
    },

    #[error("Substitution payload contains reserved character '{ch}' at byte {offset}")]
    ReservedCharacter { ch: char, offset: usize },
}

/// A named, static prompt text with exactly one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptTemplate {
    pub name: &'static str,
    pub text: &'static str,
}

impl PromptTemplate {
    /// Replaces the single `{context}` placeholder with `payload`.
    ///
    /// Fails instead of guessing when the template is not single-placeholder,
    /// or when the payload carries brace characters that would read as
    /// template syntax.
    pub fn render(&self, payload: &str) -> Result<String, TemplateError> {
        match self.text.matches(CONTEXT_PLACEHOLDER).count() {
            1 => {}
            0 => {
                return Err(TemplateError::MissingPlaceholder {
                    template: self.name,
                    placeholder: CONTEXT_PLACEHOLDER,
                })
            }
            count => {
                return Err(TemplateError::AmbiguousPlaceholder {
                    template: self.name,
                    placeholder: CONTEXT_PLACEHOLDER,
                    count,
                })
            }
        }

        if let Some((offset, ch)) = payload.char_indices().find(|(_, c)| matches!(*c, '{' | '}')) {
            return Err(TemplateError::ReservedCharacter { ch, offset });
        }

        Ok(self.text.replacen(CONTEXT_PLACEHOLDER, payload, 1))
    }
}
