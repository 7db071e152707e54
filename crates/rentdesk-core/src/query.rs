//! Query-string hand-off of a selected range to report endpoints.

use url::Url;

use crate::range::FormattedRange;

/// Query key carrying the range start.
pub const START_DATE_PARAM: &str = "startDate";
/// Query key carrying the range end.
pub const END_DATE_PARAM: &str = "endDate";

impl FormattedRange {
    /// Append `startDate`/`endDate` pairs to `url`.
    pub fn append_to_url(&self, url: &mut Url) {
        url.query_pairs_mut()
            .append_pair(START_DATE_PARAM, &self.start)
            .append_pair(END_DATE_PARAM, &self.end);
    }

    /// Read a range back from a URL's query. Both keys must be present;
    /// the last occurrence of a key wins.
    pub fn from_url(url: &Url) -> Option<Self> {
        let mut start = None;
        let mut end = None;
        for (key, value) in url.query_pairs() {
            match key.as_ref() {
                START_DATE_PARAM => start = Some(value.into_owned()),
                END_DATE_PARAM => end = Some(value.into_owned()),
                _ => {}
            }
        }
        Some(Self::new(start?, end?))
    }
}
