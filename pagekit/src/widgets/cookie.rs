//! Cookie consent banner, and the one persisted flag it owns.

use std::fmt;

use log::{debug, info, warn};
use regex::Regex;
use sitedom::{Document, NodeId, Selector};

use crate::config::SiteConfig;
use crate::error::BindError;

const BANNER: &str = "cookie";
const BUTTON: &str = "cookie__button";
const VISIBLE: &str = "cookie--visible";

/// Access to `document.cookie`.
pub trait CookieJar: fmt::Debug {
    /// The `name=value; name=value` string the page can read.
    fn cookie_string(&self) -> String;

    /// Write one `Set-Cookie`-style string.
    fn set_cookie(&mut self, cookie: &str);
}

/// In-memory jar with browser-like semantics: later writes replace earlier
/// ones and `max-age<=0` deletes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCookieJar {
    cookies: Vec<(String, String)>,
}

impl MemoryCookieJar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the jar, e.g. with a cookie from a previous visit.
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.cookies.push((name.to_string(), value.to_string()));
        self
    }
}

impl CookieJar for MemoryCookieJar {
    fn cookie_string(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&mut self, cookie: &str) {
        let mut parts = cookie.split(';').map(str::trim);
        let Some((name, value)) = parts.next().and_then(|pair| pair.split_once('=')) else {
            return;
        };
        let expired = parts.any(|attr| {
            attr.split_once('=').is_some_and(|(key, age)| {
                key.eq_ignore_ascii_case("max-age") && age.parse::<i64>().is_ok_and(|a| a <= 0)
            })
        });

        self.cookies.retain(|(n, _)| n != name);
        if !expired {
            self.cookies.push((name.to_string(), value.to_string()));
        }
    }
}

/// Attributes appended after `name=value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: String,
    pub secure: bool,
    pub same_site: String,
    pub max_age: Option<u64>,
}

impl Default for CookieOptions {
    fn default() -> Self {
        Self {
            path: "/".into(),
            secure: true,
            same_site: "Lax".into(),
            max_age: None,
        }
    }
}

/// Build a cookie string; name and value are percent-encoded.
pub fn encode_cookie(name: &str, value: &str, options: &CookieOptions) -> String {
    let mut cookie = format!(
        "{}={}",
        urlencoding::encode(name),
        urlencoding::encode(value)
    );
    cookie.push_str(&format!("; path={}", options.path));
    if options.secure {
        cookie.push_str("; Secure");
    }
    cookie.push_str(&format!("; SameSite={}", options.same_site));
    if let Some(max_age) = options.max_age {
        cookie.push_str(&format!("; max-age={max_age}"));
    }
    cookie
}

/// Find `name` in a `document.cookie` string and percent-decode its value.
pub fn lookup_cookie(cookies: &str, name: &str) -> Option<String> {
    let pattern = format!("(?:^|; ){}=([^;]*)", regex::escape(name));
    let re = Regex::new(&pattern).ok()?;
    let raw = re.captures(cookies)?.get(1)?.as_str();
    Some(match urlencoding::decode(raw) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    })
}

/// The `.cookie` banner.
#[derive(Debug)]
pub struct CookieBanner {
    root: NodeId,
    button: Option<NodeId>,
    name: String,
    max_age: u64,
    accepted: bool,
    jar: Box<dyn CookieJar>,
}

impl CookieBanner {
    /// Show the banner unless consent was already given.
    pub fn init(
        doc: &mut Document,
        config: &SiteConfig,
        jar: Box<dyn CookieJar>,
    ) -> Result<Self, BindError> {
        let selector = Selector::class(BANNER);
        let root = doc
            .query(doc.root(), &selector)
            .ok_or_else(|| BindError::missing("cookie", &selector))?;

        let accepted = lookup_cookie(&jar.cookie_string(), &config.cookie_name)
            .is_some_and(|value| !value.is_empty());
        let button = doc.query(root, &Selector::class(BUTTON));

        if accepted {
            debug!("cookie: consent already given");
        } else {
            doc.add_class(root, VISIBLE);
            if button.is_none() {
                warn!("cookie: banner has no '.{BUTTON}', it cannot be dismissed");
            }
        }

        Ok(Self {
            root,
            button,
            name: config.cookie_name.clone(),
            max_age: config.cookie_max_age,
            accepted,
            jar,
        })
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn is_accepted(&self) -> bool {
        self.accepted
    }

    pub fn jar(&self) -> &dyn CookieJar {
        self.jar.as_ref()
    }

    pub fn handle_click(&mut self, doc: &mut Document, target: NodeId) {
        if self.accepted {
            return;
        }
        let Some(button) = self.button else { return };
        if !doc.contains(button, target) {
            return;
        }

        let options = CookieOptions {
            max_age: Some(self.max_age),
            ..Default::default()
        };
        self.jar.set_cookie(&encode_cookie(&self.name, "true", &options));
        doc.remove_class(self.root, VISIBLE);
        self.accepted = true;
        info!("cookie: consent stored");
    }
}
