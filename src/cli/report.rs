//! Report assembly and rendering for the command-line collaborator

use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::app::services::record_parser::ParseStats;
use crate::app::services::statistics::ClassroomStatistics;

/// Outcome of looking a student up in one classroom file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupOutcome {
    /// File stem used in messages, e.g. `classroom_simple`
    pub source: String,
    pub average: Option<f64>,
    pub parse_stats: ParseStats,
}

impl LookupOutcome {
    pub fn new(path: &Path, average: Option<f64>, parse_stats: ParseStats) -> Self {
        let source = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            source,
            average,
            parse_stats,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub rank: usize,
    pub name: String,
    pub average: f64,
}

/// Everything the report prints, in one serializable value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassroomReport {
    /// Lowercased query name
    pub student: String,
    pub simple: LookupOutcome,
    pub complex: LookupOutcome,
    pub total_average: f64,
    pub median_grade: f64,
    /// Number of grades the median was taken over
    pub grade_count: usize,
    pub ranking: Vec<RankingEntry>,
}

impl ClassroomReport {
    pub fn new(
        student: impl Into<String>,
        simple: LookupOutcome,
        complex: LookupOutcome,
        statistics: &ClassroomStatistics,
    ) -> Self {
        let ranking = statistics
            .ranking
            .iter()
            .enumerate()
            .map(|(i, (_, record))| RankingEntry {
                rank: i + 1,
                name: record.name.clone(),
                average: record.average,
            })
            .collect();

        Self {
            student: student.into(),
            simple,
            complex,
            total_average: statistics.total_average,
            median_grade: statistics.median_grade,
            grade_count: statistics.grade_count,
            ranking,
        }
    }

    /// Median as the report prints it
    ///
    /// An odd count picks a recorded grade, shown as an integer (`80`). An
    /// even count averages the middle pair, shown with a fraction (`85.0`).
    pub fn median_display(&self) -> String {
        if self.grade_count % 2 == 1 {
            format!("{}", self.median_grade)
        } else {
            format!("{:?}", self.median_grade)
        }
    }

    /// Render the report as pretty-printed JSON
    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for ClassroomReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let display_name = capitalize(&self.student);

        for (heading, outcome) in [
            ("Testing Simple Classroom file:", &self.simple),
            ("Testing Complex Classroom file:", &self.complex),
        ] {
            writeln!(f, "{}", heading.bold())?;
            match outcome.average {
                Some(avg) => writeln!(f, "{}'s average grade is {:.2}\n", display_name, avg)?,
                None => writeln!(
                    f,
                    "Student doesn't exist in the {} file.\n",
                    outcome.source
                )?,
            }
        }

        writeln!(
            f,
            "{}",
            "Classroom Statistics (Complex Classroom File)".bright_green().bold()
        )?;
        writeln!(f, "Total average: {:.2}", self.total_average)?;
        writeln!(f, "Median grade: {}\n", self.median_display())?;
        writeln!(f, "Students sorted by average grade from highest to lowest:")?;
        for entry in &self.ranking {
            writeln!(
                f,
                "{}. {}, average grade: {:.2}",
                entry.rank, entry.name, entry.average
            )?;
        }

        Ok(())
    }
}

/// Uppercase the first character and lowercase the rest
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
