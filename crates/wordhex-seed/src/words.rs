//! The fixed sample word list seeded into the `words` table.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::config::RecordShape;

/// Difficulty labels understood by the extended `words` schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

/// One sample word with the full extended column set.
///
/// The basic shape drops `difficulty` and `category` at serialization time;
/// the list itself always carries them.
#[derive(Debug, Clone, Serialize)]
pub struct WordRecord {
    pub value: &'static str,
    pub hint: &'static str,
    pub difficulty: Difficulty,
    pub category: &'static str,
}

impl WordRecord {
    /// JSON payload for the given shape.
    pub fn payload(&self, shape: RecordShape) -> serde_json::Value {
        match shape {
            RecordShape::Basic => json!({
                "value": self.value,
                "hint": self.hint,
            }),
            RecordShape::Extended => json!({
                "value": self.value,
                "hint": self.hint,
                "difficulty": self.difficulty,
                "category": self.category,
            }),
        }
    }
}

/// The 15 sample words, seeded in this order.
pub const SAMPLE_WORDS: &[WordRecord] = &[
    WordRecord {
        value: "PYTHON",
        hint: "A popular programming language or a large snake",
        difficulty: Difficulty::Easy,
        category: "programming",
    },
    WordRecord {
        value: "DATABASE",
        hint: "Organized collection of structured data",
        difficulty: Difficulty::Medium,
        category: "technology",
    },
    WordRecord {
        value: "ALGORITHM",
        hint: "Step-by-step procedure for solving a problem",
        difficulty: Difficulty::Hard,
        category: "computer-science",
    },
    WordRecord {
        value: "JAVASCRIPT",
        hint: "Programming language for web browsers",
        difficulty: Difficulty::Medium,
        category: "programming",
    },
    WordRecord {
        value: "HEXAGON",
        hint: "Six-sided polygon shape",
        difficulty: Difficulty::Easy,
        category: "geometry",
    },
    WordRecord {
        value: "ENCRYPTION",
        hint: "Process of encoding data for security",
        difficulty: Difficulty::Hard,
        category: "security",
    },
    WordRecord {
        value: "VARIABLE",
        hint: "Named storage location for data values",
        difficulty: Difficulty::Medium,
        category: "programming",
    },
    WordRecord {
        value: "LOCALHOST",
        hint: "Default network name for your own computer",
        difficulty: Difficulty::Easy,
        category: "networking",
    },
    WordRecord {
        value: "DEBUGGING",
        hint: "Process of finding and fixing code errors",
        difficulty: Difficulty::Hard,
        category: "programming",
    },
    WordRecord {
        value: "FUNCTION",
        hint: "Reusable block of code that performs a task",
        difficulty: Difficulty::Medium,
        category: "programming",
    },
    WordRecord {
        value: "TYPESCRIPT",
        hint: "JavaScript with static typing",
        difficulty: Difficulty::Medium,
        category: "programming",
    },
    WordRecord {
        value: "FIREWALL",
        hint: "Network security system",
        difficulty: Difficulty::Medium,
        category: "security",
    },
    WordRecord {
        value: "PROTOCOL",
        hint: "Set of rules for communication",
        difficulty: Difficulty::Hard,
        category: "networking",
    },
    WordRecord {
        value: "COMPILER",
        hint: "Program that converts code to machine language",
        difficulty: Difficulty::Hard,
        category: "programming",
    },
    WordRecord {
        value: "SUPABASE",
        hint: "Open source Firebase alternative",
        difficulty: Difficulty::Medium,
        category: "backend",
    },
];
