//! The status line shown under the board.

use serde::{Deserialize, Serialize};

/// Counters and times the renderer displays after every change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusLine {
    pub total_pairs: usize,
    pub matches: usize,
    pub pairs_left: usize,
    pub clicks: u32,
    pub seconds_left: u32,
    pub seconds_elapsed: u32,
}

impl std::fmt::Display for StatusLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Total pairs: {} | Matches: {} | Pairs left: {} | Clicks: {} | You got {} seconds left | {} seconds have passed",
            self.total_pairs,
            self.matches,
            self.pairs_left,
            self.clicks,
            self.seconds_left,
            self.seconds_elapsed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let status = StatusLine {
            total_pairs: 6,
            matches: 2,
            pairs_left: 4,
            clicks: 5,
            seconds_left: 21,
            seconds_elapsed: 9,
        };
        assert_eq!(
            status.to_string(),
            "Total pairs: 6 | Matches: 2 | Pairs left: 4 | Clicks: 5 | You got 21 seconds left | 9 seconds have passed"
        );
    }
}
