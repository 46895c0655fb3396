// Prompt Assembler: persona templates, validated substitution, and the
// fixed per-persona configuration the running service is started with.

pub mod assembler;
pub mod handlers;
pub mod substitute;
pub mod templates;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub use assembler::PromptAssembler;
pub use substitute::{PromptTemplate, TemplateError};

/// The closed set of KOBE personas. Each one pins a template and the
/// table it is written against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    #[default]
    RegularSeason,
    YouthPipeline,
}

#[derive(Debug, Error)]
#[error("Unknown persona '{0}'; expected one of: regular_season, youth_pipeline")]
pub struct UnknownPersona(String);

impl Persona {
    pub const ALL: [Persona; 2] = [Persona::RegularSeason, Persona::YouthPipeline];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::RegularSeason => "regular_season",
            Persona::YouthPipeline => "youth_pipeline",
        }
    }

    pub fn template(&self) -> PromptTemplate {
        match self {
            Persona::RegularSeason => PromptTemplate {
                name: "regular_season",
                text: templates::REGULAR_SEASON,
            },
            Persona::YouthPipeline => PromptTemplate {
                name: "youth_pipeline",
                text: templates::YOUTH_PIPELINE,
            },
        }
    }

    /// The hardcoded build configuration for this persona.
    pub fn prompt_config(&self) -> PromptConfig {
        match self {
            Persona::RegularSeason => PromptConfig {
                persona: *self,
                table_reference: templates::REGULAR_SEASON_TABLE,
                description: templates::REGULAR_SEASON_DESCRIPTION,
                metadata_query: Some(templates::DEFINITIONS_QUERY),
            },
            Persona::YouthPipeline => PromptConfig {
                persona: *self,
                table_reference: templates::YOUTH_PIPELINE_TABLE,
                description: templates::YOUTH_PIPELINE_DESCRIPTION,
                metadata_query: Some(templates::DEFINITIONS_QUERY),
            },
        }
    }
}

impl FromStr for Persona {
    type Err = UnknownPersona;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownPersona(s.to_string()))
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything the assembler needs to produce one system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptConfig {
    pub persona: Persona,
    pub table_reference: &'static str,
    pub description: &'static str,
    pub metadata_query: Option<&'static str>,
}
