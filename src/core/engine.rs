use crate::core::{Console, Month, Season};
use crate::utils::error::Result;
use crate::utils::validation;

/// Outcome of one prompt/advice cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Input parsed; season and advice were printed.
    Advised { month: Month, season: Season },
    /// Input rejected; the invalid-input line was printed.
    Rejected { message: String },
}

pub struct AdvisorEngine<C: Console> {
    console: C,
}

impl<C: Console> AdvisorEngine<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }

    /// Runs one prompt/parse/lookup/print cycle.
    ///
    /// Invalid input is reported on the console and returned as a
    /// normal outcome; only console I/O failures surface as `Err`.
    pub fn run(&mut self) -> Result<CycleOutcome> {
        let raw = self.console.prompt("Enter the month number (1-12): ")?;

        match validation::parse_month_input(&raw) {
            Ok(month) => {
                let season = month.season();
                let advice = season.advice();

                tracing::debug!("Resolved month {} to season {}", month.number(), season);

                // 先空一行再輸出結果
                self.console.write_line("")?;
                self.console
                    .write_line(&format!("Season: {}", season.display_name()))?;
                self.console.write_line(&format!("Advice: {}", advice))?;

                Ok(CycleOutcome::Advised { month, season })
            }
            Err(error) => {
                let message = error.to_string();
                self.console
                    .write_line(&format!("Invalid input: {}", message))?;

                Ok(CycleOutcome::Rejected { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptedConsole {
        input: String,
        prompts: Vec<String>,
        lines: Vec<String>,
    }

    impl ScriptedConsole {
        fn new(input: &str) -> Self {
            Self {
                input: input.to_string(),
                prompts: Vec::new(),
                lines: Vec::new(),
            }
        }
    }

    impl Console for ScriptedConsole {
        fn prompt(&mut self, text: &str) -> Result<String> {
            self.prompts.push(text.to_string());
            Ok(self.input.clone())
        }

        fn write_line(&mut self, line: &str) -> Result<()> {
            self.lines.push(line.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_advises_for_valid_month() {
        let mut console = ScriptedConsole::new("1");
        let outcome = AdvisorEngine::new(&mut console).run().unwrap();

        assert_eq!(
            outcome,
            CycleOutcome::Advised {
                month: Month::new(1).unwrap(),
                season: Season::Summer,
            }
        );
        assert_eq!(console.prompts, vec!["Enter the month number (1-12): "]);
        assert_eq!(
            console.lines,
            vec![
                "",
                "Season: Summer",
                "Advice: Water plants early in the morning and mulch to retain moisture.",
            ]
        );
    }

    #[test]
    fn test_reports_out_of_range_input() {
        let mut console = ScriptedConsole::new(" 13 ");
        let outcome = AdvisorEngine::new(&mut console).run().unwrap();

        assert_eq!(
            outcome,
            CycleOutcome::Rejected {
                message: "Month must be between 1 and 12.".to_string(),
            }
        );
        assert_eq!(
            console.lines,
            vec!["Invalid input: Month must be between 1 and 12."]
        );
    }

    #[test]
    fn test_reports_non_numeric_input() {
        let mut console = ScriptedConsole::new("june");
        let outcome = AdvisorEngine::new(&mut console).run().unwrap();

        assert!(matches!(outcome, CycleOutcome::Rejected { .. }));
        assert_eq!(
            console.lines,
            vec!["Invalid input: 'june' is not a valid month number."]
        );
    }

    #[test]
    fn test_input_whitespace_is_trimmed() {
        let mut console = ScriptedConsole::new(" 7 \n");
        let outcome = AdvisorEngine::new(&mut console).run().unwrap();

        assert_eq!(
            outcome,
            CycleOutcome::Advised {
                month: Month::new(7).unwrap(),
                season: Season::Winter,
            }
        );
    }
}
