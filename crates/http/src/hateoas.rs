//! Hypermedia links attached to resource representations.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
        }
    }

    pub fn self_rel(href: impl Into<String>) -> Self {
        Self::new("self", href)
    }
}

/// URL of a single resource: `{base_url}/{resource}/{key}`.
pub fn link_for(base_url: &str, resource: &str, key: i64) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), resource, key)
}

/// Percent-encode one path segment (RFC 3986 unreserved characters pass through).
pub fn encode_segment(segment: &str) -> String {
    let mut encoded = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                encoded.push(byte as char)
            }
            other => encoded.push_str(&format!("%{:02X}", other)),
        }
    }
    encoded
}

/// Builds links against the configured public origin.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base_url: String,
}

impl LinkBuilder {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `self` link of one resource
    pub fn self_link(&self, resource: &str, key: i64) -> Link {
        Link::self_rel(link_for(&self.base_url, resource, key))
    }

    /// Absolute URL for a path below the base (`/file/downloadFile/a.txt`).
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Navigation links of a listing: `self`, `first`, `prev`, `next`, `last`.
    /// `path` is relative to the base URL and carries no query string.
    pub fn page_links(&self, path: &str, page: &PageMetadata, direction: &str) -> Vec<Link> {
        let href = |number: u64| {
            format!(
                "{}?page={}&size={}&direction={}",
                self.url(path),
                number,
                page.size,
                direction
            )
        };

        let mut links = vec![Link::self_rel(href(page.number))];
        if page.total_pages > 0 {
            links.push(Link::new("first", href(0)));
            if page.number > 0 {
                links.push(Link::new("prev", href(page.number - 1)));
            }
            if page.number + 1 < page.total_pages {
                links.push(Link::new("next", href(page.number + 1)));
            }
            links.push(Link::new("last", href(page.total_pages - 1)));
        }
        links
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
    pub number: u64,
}

impl PageMetadata {
    pub fn new(size: u64, total_elements: u64, number: u64) -> Self {
        let total_pages = if size == 0 {
            0
        } else {
            total_elements.div_ceil(size)
        };
        Self {
            size,
            total_elements,
            total_pages,
            number,
        }
    }
}

/// A page of representations with navigation links.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "pagedModel")]
pub struct PagedModel<T> {
    pub content: Vec<T>,
    pub links: Vec<Link>,
    pub page: PageMetadata,
}
