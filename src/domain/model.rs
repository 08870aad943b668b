use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum DemoKind {
    Debug,
    Hello,
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoKind::Debug => write!(f, "debug"),
            DemoKind::Hello => write!(f, "hello"),
        }
    }
}

/// Inputs of the debugging demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugSettings {
    pub values: Vec<i32>,
    pub factorial_of: u32,
    pub count_to: u32,
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self {
            values: vec![5, 2, 9, 1, 7, 3],
            factorial_of: 5,
            count_to: 5,
        }
    }
}

/// Inputs of the hello-world demo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloSettings {
    pub num1: i32,
    pub num2: i32,
    pub fruits: Vec<String>,
}

impl Default for HelloSettings {
    fn default() -> Self {
        Self {
            num1: 10,
            num2: 5,
            fruits: ["Apple", "Banana", "Cherry", "Date"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// What one run printed and computed.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub program: DemoKind,
    pub output: Vec<String>,
    pub results: BTreeMap<String, serde_json::Value>,
}

impl DemoReport {
    pub fn new(program: DemoKind) -> Self {
        Self {
            program,
            output: Vec::new(),
            results: BTreeMap::new(),
        }
    }

    pub fn record(&mut self, key: &str, value: impl Into<serde_json::Value>) {
        self.results.insert(key.to_string(), value.into());
    }
}
