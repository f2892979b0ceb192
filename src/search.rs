//! Literal substring search over the document
//!
//! Matches are non-overlapping and reported as character offsets. After a
//! hit the scan resumes at the end of the match, so searching "aa" in "aaaa"
//! yields two matches.

/// One occurrence of the search term, in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub start: usize,
    pub len: usize,
}

impl Match {
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Whether the character at `offset` is part of this match
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }
}

/// Summary of a search run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The term was empty; nothing was scanned
    NoTerm,
    NoMatches,
    Found(usize),
}

impl SearchOutcome {
    /// Text shown in the search bar after a run
    pub fn status_text(&self) -> String {
        match self {
            SearchOutcome::NoTerm => "Enter a search term".to_string(),
            SearchOutcome::NoMatches => "No matches found".to_string(),
            SearchOutcome::Found(count) => format!("Found {} match(es)", count),
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, SearchOutcome::Found(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: SearchOutcome,
    pub matches: Vec<Match>,
}

impl SearchResult {
    /// Where the caret goes after the search
    pub fn first(&self) -> Option<Match> {
        self.matches.first().copied()
    }
}

fn chars_equal(a: char, b: char, case_sensitive: bool) -> bool {
    a == b || (!case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
}

/// Find every non-overlapping occurrence of `term` in `text`.
///
/// Case-insensitive comparison folds each character with
/// `char::to_lowercase`, so match lengths always equal the term length.
pub fn find_all(text: &str, term: &str, case_sensitive: bool) -> SearchResult {
    let needle: Vec<char> = term.chars().collect();
    if needle.is_empty() {
        return SearchResult {
            outcome: SearchOutcome::NoTerm,
            matches: Vec::new(),
        };
    }

    let haystack: Vec<char> = text.chars().collect();
    let mut matches = Vec::new();
    let mut pos = 0;

    while pos + needle.len() <= haystack.len() {
        let hit = haystack[pos..pos + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| chars_equal(a, b, case_sensitive));

        if hit {
            matches.push(Match {
                start: pos,
                len: needle.len(),
            });
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    let outcome = if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Found(matches.len())
    };
    tracing::debug!("Search for {:?}: {:?}", term, outcome);

    SearchResult { outcome, matches }
}
