use serde::{Deserialize, Serialize};

/// Parameters as collected from a user: free-text tonic and scale name,
/// complexity level 1-10, roman numeral and inversion count.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ChordRequest {
    pub tonic: String,
    pub scale_type: String,
    pub complexity: i64,
    pub numeral: String,
    pub inversion: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ChordResult {
    pub tonic: String,
    pub scale_type: String,
    pub numeral: String,
    pub complexity: i64,
    pub inversion: i64,
    pub scale: Vec<String>,
    pub chord: Vec<String>,
}

impl ChordResult {
    pub fn display(&self) -> String {
        self.chord.join(" ")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ScaleInfo {
    pub scale_type: String,
    pub intervals: Vec<u8>,
    pub tonics: Vec<String>,
}
