use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub enum Faculty {
    #[serde(rename = "Computer Science", alias = "Computer_Science")]
    ComputerScience,
    Economics,
    Law,
    Engineering,
}

impl Faculty {
    pub const ALL: [Faculty; 4] = [
        Faculty::ComputerScience,
        Faculty::Economics,
        Faculty::Law,
        Faculty::Engineering,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Faculty::ComputerScience => "Computer Science",
            Faculty::Economics => "Economics",
            Faculty::Law => "Law",
            Faculty::Engineering => "Engineering",
        }
    }
}

impl fmt::Display for Faculty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
