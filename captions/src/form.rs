use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub keyword: String,
    pub count: u32,
    pub word_count: u32,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            count: 1,
            word_count: 50,
        }
    }
}

impl FormState {
    pub fn payload(&self) -> RequestPayload {
        RequestPayload {
            keyword: self.keyword.clone(),
            count: self.count,
            word_count: self.word_count,
        }
    }
}

/// Body of the outbound webhook call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub keyword: String,
    pub count: u32,
    pub word_count: u32,
}

/// Reads a number input leniently: leading digits count, everything else is 0.
pub fn parse_count(input: &str) -> u32 {
    let input = input.trim_start();
    let input = input.strip_prefix('+').unwrap_or(input);
    let digits = input
        .find(|c: char| !c.is_ascii_digit())
        .map_or(input, |end| &input[..end]);
    digits.parse().unwrap_or(0)
}
