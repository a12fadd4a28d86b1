//! Site-wide metadata: titles, canonical URL, footer, robots.txt and sitemap.

use chrono::{Datelike, Utc};

/// Application name shown in titles and metadata.
pub const APP_NAME: &str = "WhatsApp Link Helper";

/// Short description used for `<meta name="description">` and Open Graph.
pub const APP_DESCRIPTION: &str = "WhatsApp Link Helper / Generator";

/// Author credited in the footer.
pub const AUTHOR_NAME: &str = "agustinusnathaniel.com";

/// Footer link target for [`AUTHOR_NAME`].
pub const AUTHOR_URL: &str = "https://agustinusnathaniel.com?ref=wa.sznm.dev";

/// Metadata rendered into every page and the crawler files.
#[derive(Debug, Clone)]
pub struct SiteMeta {
    pub name: &'static str,
    pub description: &'static str,
    pub author_name: &'static str,
    pub author_url: &'static str,
    /// Public base URL without a trailing slash.
    pub site_url: String,
}

impl SiteMeta {
    pub fn new(site_url: impl AsRef<str>) -> Self {
        Self {
            name: APP_NAME,
            description: APP_DESCRIPTION,
            author_name: AUTHOR_NAME,
            author_url: AUTHOR_URL,
            site_url: site_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    /// Canonical URL of the form page.
    pub fn canonical_url(&self) -> String {
        format!("{}/", self.site_url)
    }

    /// Current year shown in the footer.
    pub fn copyright_year(&self) -> i32 {
        Utc::now().year()
    }

    /// `<title>` for a sub page, e.g. `"Page not Found | WhatsApp Link Helper"`.
    pub fn page_title(&self, page: &str) -> String {
        format!("{} | {}", page, self.name)
    }

    /// Body of `/robots.txt`.
    pub fn robots_txt(&self) -> String {
        format!(
            "# *\nUser-agent: *\nAllow: /\n\n# Host\nHost: {}\n\n# Sitemaps\nSitemap: {}/sitemap.xml\n",
            self.site_url, self.site_url
        )
    }

    /// Body of `/sitemap.xml`. The form page is the only indexable page.
    pub fn sitemap_xml(&self) -> String {
        format!(
            concat!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n",
                "<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
                "<url><loc>{}</loc><changefreq>daily</changefreq><priority>0.7</priority></url>\n",
                "</urlset>\n"
            ),
            self.canonical_url()
        )
    }
}
