/// Deep links and share URLs
///
/// A deep link carries a single 1-based integer query parameter
/// (`?fox=7`, `?roo=3`). It is read once at startup to place the
/// cursor, and written when building share links.

use url::Url;

use crate::error::LinkError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    param: String,
}

impl DeepLink {
    /// Create a resolver for the query parameter `param`
    pub fn new(param: impl Into<String>) -> Self {
        Self { param: param.into() }
    }

    /// Resolve a query string into a 0-based cursor.
    ///
    /// The parameter is valid only if it is an integer in
    /// `[1, catalog_len]`; anything else yields the default cursor 0.
    /// A leading `?` is accepted and the first occurrence wins.
    pub fn initial_cursor(&self, query: &str, catalog_len: usize) -> usize {
        let query = query.strip_prefix('?').unwrap_or(query);
        let value = url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| *key == self.param)
            .map(|(_, value)| value);

        let Some(value) = value else {
            return 0;
        };
        match value.trim().parse::<usize>() {
            Ok(position) if (1..=catalog_len).contains(&position) => position - 1,
            _ => 0,
        }
    }

    /// Resolve either a full URL or a bare query string
    pub fn cursor_from_location(&self, location: &str, catalog_len: usize) -> usize {
        let query = match Url::parse(location) {
            Ok(url) => url.query().unwrap_or_default().to_string(),
            Err(_) => {
                let location = location.split('#').next().unwrap_or_default();
                match location.split_once('?') {
                    Some((_, query)) => query.to_string(),
                    None => location.to_string(),
                }
            }
        };
        self.initial_cursor(&query, catalog_len)
    }

    /// Build a share link for item `id` on top of `base_url`'s origin and path.
    /// Any existing query or fragment on the base is dropped.
    pub fn share_url(&self, base_url: &str, id: u32) -> Result<Url, LinkError> {
        let mut url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(LinkError::CannotBeABase(base_url.to_string()));
        }

        url.set_fragment(None);
        url.set_query(None);
        url.query_pairs_mut()
            .append_pair(&self.param, &id.to_string());
        Ok(url)
    }
}
