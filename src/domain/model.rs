/// Raw page returned by the fetch collaborator.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub body: String,
    pub content_type: Option<String>,
}

/// Final product of one transformation request. Built once per request
/// and handed back to the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutcome {
    pub html: String,
    pub title: String,
    pub original_url: String,
}
