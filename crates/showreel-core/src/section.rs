//! Page sections and in-page anchor resolution.

/// A linkable section of the single-page site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteSection {
    Home,
    Portfolio,
    About,
    Contact,
}

impl SiteSection {
    /// All sections, in navigation order.
    pub const ALL: [SiteSection; 4] = [
        SiteSection::Home,
        SiteSection::Portfolio,
        SiteSection::About,
        SiteSection::Contact,
    ];

    /// Get the display name for this section
    pub fn display_name(&self) -> &'static str {
        match self {
            SiteSection::Home => "Home",
            SiteSection::Portfolio => "Portfolio",
            SiteSection::About => "About",
            SiteSection::Contact => "Contact",
        }
    }

    /// Element id the section is anchored to.
    pub fn anchor(&self) -> &'static str {
        match self {
            SiteSection::Home => "home",
            SiteSection::Portfolio => "portfolio",
            SiteSection::About => "about",
            SiteSection::Contact => "contact",
        }
    }

    /// In-page href for this section, e.g. `#portfolio`.
    pub fn href(&self) -> String {
        format!("#{}", self.anchor())
    }

    /// Resolve an in-page href (`#...`) to a known section.
    ///
    /// Returns `None` for hrefs that do not start with `#` or that name no
    /// section; the caller treats that as a silent no-op rather than an
    /// error, matching anchor-click semantics.
    pub fn resolve(href: &str) -> Option<SiteSection> {
        let id = href.strip_prefix('#')?;
        SiteSection::ALL.into_iter().find(|s| s.anchor() == id)
    }
}
