use anyhow::bail;
use std::fmt;
use std::str::FromStr;

/// Site language. English pages use bare page names; Arabic pages carry a
/// `-ar` suffix and render right-to-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Ar,
}

impl Lang {
    /// ISO language code, as used for the `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Ar => "ar",
        }
    }

    /// Text direction for the `dir` attribute.
    pub fn dir(&self) -> &'static str {
        match self {
            Lang::En => "ltr",
            Lang::Ar => "rtl",
        }
    }

    /// The other site language (the toggle target).
    pub fn other(&self) -> Lang {
        match self {
            Lang::En => Lang::Ar,
            Lang::Ar => Lang::En,
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Lang {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Lang::En),
            "ar" | "arabic" => Ok(Lang::Ar),
            other => bail!("unsupported language: {}", other),
        }
    }
}

/// Identity of a page derived from its file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageInfo {
    /// Language-neutral page slug, e.g. "about" for both about.html and
    /// about-ar.html.
    pub slug: String,
    pub lang: Lang,
}

/// Parse a page name into its slug and language.
///
/// Query strings and fragments are stripped, a trailing `.html` is removed
/// (extensionless routing serves the same pages), and an empty name means
/// the index page.
pub fn page_info(page: &str) -> PageInfo {
    let name = page.split(['?', '#']).next().unwrap_or("");
    let name = name.strip_suffix(".html").unwrap_or(name);
    let name = if name.is_empty() || name == "/" {
        "index"
    } else {
        name
    };

    match name.strip_suffix("-ar") {
        Some(slug) => PageInfo {
            slug: if slug.is_empty() { "index" } else { slug }.to_string(),
            lang: Lang::Ar,
        },
        None => PageInfo {
            slug: name.to_string(),
            lang: Lang::En,
        },
    }
}

/// Page name serving the requested language, following the site convention
/// `page.html` / `page-ar.html` (the index pair is `index.html` and
/// `index-ar.html`). Returns `None` when the page already is in the
/// requested language.
pub fn page_for(page: &str, lang: Lang) -> Option<String> {
    let name = page.split(['?', '#']).next().unwrap_or("");

    match lang {
        Lang::Ar => {
            if name == "index.html" {
                Some("index-ar.html".to_string())
            } else if name.ends_with("-ar.html") {
                None
            } else {
                Some(name.replace(".html", "-ar.html"))
            }
        }
        Lang::En => {
            if name == "index-ar.html" {
                Some("index.html".to_string())
            } else if !name.contains("-ar") {
                None
            } else {
                Some(name.replace("-ar.html", ".html"))
            }
        }
    }
}
