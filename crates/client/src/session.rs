//! Captured session cookies.

use crate::consts::VID_COOKIE;
use crate::error::{ErrorKind, Result};
use exn::OptionExt;
use std::convert::Infallible;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Session cookies captured from an authenticated browser session.
///
/// The platform has no token-based API authentication; every request is
/// authorized by replaying the browser's cookie jar. Cookies are stored in
/// capture order and re-serialized verbatim into the `Cookie` request header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    cookies: Vec<(String, String)>,
}

impl Session {
    /// Parses a raw `Cookie` header value, e.g. `"wr_vid=123; wr_skey=abc"`.
    ///
    /// Pairs without an `=` separator and empty segments are skipped; this is
    /// forgiving on purpose, since the value is usually pasted by hand from
    /// browser developer tools.
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                Some((name.to_string(), value.trim().to_string()))
            })
            .collect();
        Self { cookies }
    }

    /// Returns the value of the named cookie, if captured.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    /// The numeric user id the shelf endpoint keys on.
    pub fn user_vid(&self) -> Result<&str> {
        self.get(VID_COOKIE).ok_or_raise(|| ErrorKind::MissingCookie(VID_COOKIE))
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl FromStr for Session {
    type Err = Infallible;
    fn from_str(header: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(header))
    }
}

impl Display for Session {
    /// Re-serializes the cookies into a `Cookie` header value.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (name, value) in &self.cookies {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}
