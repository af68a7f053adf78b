//! The six pipeline stages a plugin can bind to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PluginError;

/// Pipeline stage, declared in execution order.
///
/// Ordering follows the pipeline: `Input < Parse < ... < Output`. The host
/// drives that order; plugins only compare against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Input,
    Parse,
    Think,
    Do,
    Review,
    Output,
}

impl Stage {
    /// All stages in canonical order.
    pub const ALL: [Stage; 6] = [
        Stage::Input,
        Stage::Parse,
        Stage::Think,
        Stage::Do,
        Stage::Review,
        Stage::Output,
    ];

    /// The last stage of the pipeline, where results leave the system.
    pub const TERMINAL: Stage = Stage::Output;

    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Input => "input",
            Stage::Parse => "parse",
            Stage::Think => "think",
            Stage::Do => "do",
            Stage::Review => "review",
            Stage::Output => "output",
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Stage::TERMINAL
    }

    /// Zero-based index in [`Stage::ALL`].
    pub fn position(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = PluginError;

    /// Case-insensitive. Accepts the canonical tokens plus the descriptive
    /// names `intake`, `reason`, `act` and `emit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stage = match s.to_ascii_lowercase().as_str() {
            "input" | "intake" => Stage::Input,
            "parse" => Stage::Parse,
            "think" | "reason" => Stage::Think,
            "do" | "act" => Stage::Do,
            "review" => Stage::Review,
            "output" | "emit" => Stage::Output,
            _ => return Err(PluginError::invalid_stage(s)),
        };
        Ok(stage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_canonical_order() {
        let tokens: Vec<&str> = Stage::ALL.iter().map(Stage::as_str).collect();
        assert_eq!(tokens, ["input", "parse", "think", "do", "review", "output"]);
        for (idx, stage) in Stage::ALL.iter().enumerate() {
            assert_eq!(stage.position(), idx);
        }
        let mut sorted = Stage::ALL;
        sorted.reverse();
        sorted.sort();
        assert_eq!(sorted, Stage::ALL);
    }

    #[test]
    fn test_only_output_is_terminal() {
        let terminal: Vec<Stage> = Stage::ALL.into_iter().filter(Stage::is_terminal).collect();
        assert_eq!(terminal, vec![Stage::Output]);
    }

    #[test]
    fn test_parse_canonical_and_aliases() {
        for stage in Stage::ALL {
            assert_eq!(stage.as_str().parse::<Stage>().unwrap(), stage);
            assert_eq!(stage.as_str().to_uppercase().parse::<Stage>().unwrap(), stage);
        }
        assert_eq!("intake".parse::<Stage>().unwrap(), Stage::Input);
        assert_eq!("Reason".parse::<Stage>().unwrap(), Stage::Think);
        assert_eq!("ACT".parse::<Stage>().unwrap(), Stage::Do);
        assert_eq!("emit".parse::<Stage>().unwrap(), Stage::Output);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "NOT_A_STAGE".parse::<Stage>().unwrap_err();
        match err {
            PluginError::InvalidStage { value, valid } => {
                assert_eq!(value, "NOT_A_STAGE");
                assert_eq!(valid.len(), 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!("".parse::<Stage>().is_err());
        assert!(" input".parse::<Stage>().is_err());
    }

    #[test]
    fn test_stage_serde_tokens() {
        let json = serde_json::to_string(&Stage::Review).unwrap();
        assert_eq!(json, "\"review\"");
        let stage: Stage = serde_json::from_str("\"do\"").unwrap();
        assert_eq!(stage, Stage::Do);
    }
}
