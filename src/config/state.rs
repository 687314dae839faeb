use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::model::DocumentKind;

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct State {
    pub counter: Counter,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

impl State {
    /// Sequence number the next proposal of `year` gets; restarts every year.
    pub fn next_sequence(&self, year: u32) -> u32 {
        if self.counter.last_year == year {
            self.counter.last_number + 1
        } else {
            1
        }
    }

    pub fn find(&self, number: &str) -> Option<&HistoryEntry> {
        self.history.iter().find(|e| e.number == number)
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Counter {
    pub last_number: u32,
    pub last_year: u32,
}

impl Default for Counter {
    fn default() -> Self {
        Self {
            last_number: 0,
            last_year: chrono::Local::now().year() as u32,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HistoryEntry {
    pub number: String,
    pub client: String,
    pub kind: DocumentKind,
    pub date: NaiveDate,
    /// Grand total in AED
    pub total: f64,
    pub file: String,
}
