//! Fixed request configuration for the WeRead API.

/// Default API host. Every documented endpoint lives under this origin.
pub const DEFAULT_BASE_URL: &str = "https://i.weread.qq.com";

/// Descriptive header set approximating the browser the session cookies were
/// captured from. Built once at client construction; never mutated at runtime.
///
/// `Host` is derived from the request URL by the transport, and
/// `Accept-Encoding` is negotiated by the transport's decompression support,
/// so neither appears here.
pub const BROWSER_HEADERS: &[(&str, &str)] = &[
    ("connection", "keep-alive"),
    ("upgrade-insecure-requests", "1"),
    (
        "user-agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) \
         Chrome/73.0.3683.103 Safari/537.36",
    ),
    (
        "accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8,\
         application/signed-exchange;v=b3",
    ),
    ("accept-language", "zh-CN,zh;q=0.9,en;q=0.8"),
];

/// Cookie holding the numeric user id ("vid") required by the shelf endpoint.
pub const VID_COOKIE: &str = "wr_vid";
