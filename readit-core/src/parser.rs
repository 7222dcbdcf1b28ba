//! Text parsing engine
//!
//! Runs normalization, overlong splitting, delay computation, marker
//! cleanup and emphasis selection over a [`ReadableUnit`], in that order.

use std::sync::Arc;

use crate::alphabet::PriorityTable;
use crate::api::{Config, Error, Result};
use crate::emphasis;
use crate::normalize::{self, source_offsets, split_overlong, strip_marker, tokens};
use crate::readable::ReadableUnit;
use crate::timing::{self, TimingCoefficients};

/// Parser bound to one configuration and priority table
#[derive(Debug, Clone)]
pub struct TextParser {
    config: Config,
    priorities: Arc<PriorityTable>,
}

impl TextParser {
    /// Create a parser, building the priority table from the configured alphabets
    pub fn new(config: Config) -> Result<Self> {
        let priorities = PriorityTable::from_alphabets(config.alphabets())?;
        Ok(Self::with_priorities(config, Arc::new(priorities)))
    }

    /// Create a parser sharing an existing priority table
    pub fn with_priorities(config: Config, priorities: Arc<PriorityTable>) -> Self {
        Self { config, priorities }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Priority table used for emphasis
    pub fn priorities(&self) -> &Arc<PriorityTable> {
        &self.priorities
    }

    /// Process a unit in place
    ///
    /// Fails with [`Error::Configuration`] before touching the unit when no
    /// timing coefficients are configured.
    pub fn process(&self, unit: &mut ReadableUnit) -> Result<()> {
        let coefficients = self.coefficients()?;

        let normalized = normalize::normalize(unit.text());
        log::trace!("normalized {} chars", normalized.len());

        let max_length = self.config.max_word_length();
        let offsets = source_offsets(unit.text(), &normalized, max_length);
        let text = split_overlong(&normalized, max_length);
        log::trace!("split overlong tokens at {max_length}");

        let (words, delays): (Vec<String>, Vec<u32>) = tokens(&text)
            .map(|token| {
                (
                    strip_marker(token).to_owned(),
                    timing::delay(token, coefficients),
                )
            })
            .unzip();
        let emphasis = emphasis::emphasis_list(&words, &self.priorities);
        log::trace!("built lists for {} words", words.len());

        unit.set_text(text);
        unit.set_lists(words, delays, emphasis, offsets);
        Ok(())
    }

    /// Process a fresh unit built from `text`
    pub fn parse_text(&self, text: &str) -> Result<ReadableUnit> {
        let mut unit = ReadableUnit::new(text);
        self.process(&mut unit)?;
        Ok(unit)
    }

    fn coefficients(&self) -> Result<&TimingCoefficients> {
        self.config
            .coefficients()
            .ok_or_else(|| Error::Configuration("timing coefficients are not set".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COEFFICIENTS: TimingCoefficients = TimingCoefficients::new([10, 12, 20, 15, 25]);

    fn parser() -> TextParser {
        let config = Config::builder().coefficients(COEFFICIENTS).build().unwrap();
        TextParser::new(config).unwrap()
    }

    #[test]
    fn test_process_builds_aligned_lists() {
        let unit = parser().parse_text("Hello!!! World??").unwrap();
        assert_eq!(unit.text(), "Hello! World?");
        assert_eq!(unit.words(), ["Hello!", "World?"]);
        assert_eq!(unit.delays(), [20, 20]);
        assert_eq!(unit.emphasis().len(), 2);
    }

    #[test]
    fn test_delay_reads_marker_hyphens() {
        let unit = parser().parse_text("extraordinarily fine").unwrap();
        assert_eq!(unit.words(), ["extraordinar-", "ily", "fine"]);
        // The continuation hyphen of "-ily" is stripped from the word but
        // was seen by the timing model.
        assert_eq!(unit.delays(), [15, 15, 10]);
    }

    #[test]
    fn test_missing_coefficients_leave_unit_untouched() {
        let parser = TextParser::new(Config::default()).unwrap();
        let mut unit = ReadableUnit::new("Some  text!!");
        let err = parser.process(&mut unit).unwrap_err();

        assert!(matches!(err, Error::Configuration(_)));
        assert_eq!(unit.text(), "Some  text!!");
        assert!(unit.is_empty());
    }

    #[test]
    fn test_empty_and_blank_text() {
        let parser = parser();
        assert!(parser.parse_text("").unwrap().is_empty());
        assert!(parser.parse_text(" \n\t ").unwrap().is_empty());
    }

    #[test]
    fn test_shared_priorities() {
        let table = Arc::new(PriorityTable::from_alphabets(&["latin"]).unwrap());
        let config = Config::builder()
            .coefficients(COEFFICIENTS)
            .alphabets(["latin"])
            .build()
            .unwrap();
        let a = TextParser::with_priorities(config.clone(), Arc::clone(&table));
        let b = TextParser::with_priorities(config, Arc::clone(&table));
        assert!(Arc::ptr_eq(a.priorities(), b.priorities()));
        assert_eq!(
            a.parse_text("book").unwrap().emphasis(),
            b.parse_text("book").unwrap().emphasis()
        );
    }
}
