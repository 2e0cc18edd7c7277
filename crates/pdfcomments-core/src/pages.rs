//! Page selection
//!
//! Parses selections like "1-", "2-4, 9" or "-3" into 1-indexed spans.

use crate::error::ScrapeError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PageSpan {
    first: u32,
    /// `None` means through the last page
    last: Option<u32>,
}

impl PageSpan {
    fn contains(&self, page: u32) -> bool {
        page >= self.first && self.last.map_or(true, |last| page <= last)
    }
}

/// Set of pages to scrape
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    spans: Vec<PageSpan>,
}

impl PageSelection {
    /// Every page of the document ("1-")
    pub fn all() -> Self {
        Self {
            spans: vec![PageSpan {
                first: 1,
                last: None,
            }],
        }
    }

    pub fn contains(&self, page: u32) -> bool {
        self.spans.iter().any(|span| span.contains(page))
    }
}

impl Default for PageSelection {
    fn default() -> Self {
        Self::all()
    }
}

fn parse_page(input: &str) -> Result<u32, ScrapeError> {
    let page: u32 = input
        .trim()
        .parse()
        .map_err(|_| ScrapeError::InvalidPageSelection(format!("Invalid page: {}", input)))?;
    if page == 0 {
        return Err(ScrapeError::InvalidPageSelection(
            "Page numbers must be >= 1".into(),
        ));
    }
    Ok(page)
}

impl FromStr for PageSelection {
    type Err = ScrapeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut spans = Vec::new();

        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let span = match part.split_once('-') {
                // "N-" through the end
                Some((start, end)) if end.trim().is_empty() => PageSpan {
                    first: parse_page(start)?,
                    last: None,
                },
                // "-M" from the first page
                Some((start, end)) if start.trim().is_empty() => PageSpan {
                    first: 1,
                    last: Some(parse_page(end)?),
                },
                Some((start, end)) => {
                    let first = parse_page(start)?;
                    let last = parse_page(end)?;
                    if first > last {
                        return Err(ScrapeError::InvalidPageSelection(format!(
                            "Start {} > end {}",
                            first, last
                        )));
                    }
                    PageSpan {
                        first,
                        last: Some(last),
                    }
                }
                None => {
                    let page = parse_page(part)?;
                    PageSpan {
                        first: page,
                        last: Some(page),
                    }
                }
            };
            spans.push(span);
        }

        if spans.is_empty() {
            return Err(ScrapeError::InvalidPageSelection(
                "No pages specified".into(),
            ));
        }

        Ok(Self { spans })
    }
}

impl fmt::Display for PageSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, span) in self.spans.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            match span.last {
                None => write!(f, "{}-", span.first)?,
                Some(last) if last == span.first => write!(f, "{}", last)?,
                Some(last) => write!(f, "{}-{}", span.first, last)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_contains_every_page() {
        let selection = PageSelection::all();
        assert!(selection.contains(1));
        assert!(selection.contains(10_000));
        assert!(!selection.contains(0));
    }

    #[test]
    fn test_parse_open_ended() {
        let selection: PageSelection = "3-".parse().unwrap();
        assert!(!selection.contains(2));
        assert!(selection.contains(3));
        assert!(selection.contains(500));
    }

    #[test]
    fn test_parse_leading_dash() {
        let selection: PageSelection = "-2".parse().unwrap();
        assert!(selection.contains(1));
        assert!(selection.contains(2));
        assert!(!selection.contains(3));
    }

    #[test]
    fn test_parse_complex() {
        let selection: PageSelection = "1-3, 5, 8-10".parse().unwrap();
        let pages: Vec<u32> = (1..=12).filter(|p| selection.contains(*p)).collect();
        assert_eq!(pages, vec![1, 2, 3, 5, 8, 9, 10]);
    }

    #[test]
    fn test_parse_page_zero_fails() {
        assert!("0".parse::<PageSelection>().is_err());
        assert!("0-4".parse::<PageSelection>().is_err());
    }

    #[test]
    fn test_parse_reversed_range_fails() {
        assert!("5-2".parse::<PageSelection>().is_err());
    }

    #[test]
    fn test_parse_empty_fails() {
        assert!("".parse::<PageSelection>().is_err());
        assert!(" , ".parse::<PageSelection>().is_err());
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!("abc".parse::<PageSelection>().is_err());
        assert!("1-x".parse::<PageSelection>().is_err());
    }

    #[test]
    fn test_display_round_trips_default() {
        assert_eq!(PageSelection::all().to_string(), "1-");
        let selection: PageSelection = "2-4,7".parse().unwrap();
        assert_eq!(selection.to_string(), "2-4,7");
    }
}
