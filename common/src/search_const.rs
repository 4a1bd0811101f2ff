//! Constants shared by the search page and the catalog client.

/// Number of results shown per page.
pub const PAGE_SIZE: u64 = 10;

/// Maximum number of page links shown around the current page.
pub const PAGINATION_WINDOW: u64 = 5;

/// Path of the search route, without query string.
pub const SEARCH_PATH: &str = "/search";
