//! Share-link templates for the current quote.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::quotes::QuoteRecord;

/// Characters left as-is by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const TWEET_BASE: &str = "https://twitter.com/intent/tweet?hashtags=quotes&related=freecodecamp";
const TUMBLR_BASE: &str =
    "https://www.tumblr.com/widgets/share/tool?posttype=quote&tags=quotes,freecodecamp";
const TUMBLR_SUFFIX: &str =
    "canonicalUrl=https%3A%2F%2Fwww.tumblr.com%2Fbuttons&shareSource=tumblr_share_button";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    Tweet,
    Tumblr,
}

impl ShareTarget {
    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::Tweet => "Tweet",
            ShareTarget::Tumblr => "Tumblr",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLinks {
    pub tweet: String,
    pub tumblr: String,
}

impl ShareLinks {
    pub fn for_quote(quote: &QuoteRecord) -> Self {
        Self {
            tweet: tweet_url(quote),
            tumblr: tumblr_url(quote),
        }
    }

    pub fn get(&self, target: ShareTarget) -> &str {
        match target {
            ShareTarget::Tweet => &self.tweet,
            ShareTarget::Tumblr => &self.tumblr,
        }
    }
}

pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// Tweet text is `"<quote>" - <author>`.
pub fn tweet_text(quote: &QuoteRecord) -> String {
    format!("\"{}\" - {}", quote.text, quote.author)
}

pub fn tweet_url(quote: &QuoteRecord) -> String {
    format!(
        "{}&text={}",
        TWEET_BASE,
        encode_component(&tweet_text(quote))
    )
}

pub fn tumblr_url(quote: &QuoteRecord) -> String {
    format!(
        "{}&caption={}&content={}&{}",
        TUMBLR_BASE,
        encode_component(&quote.author),
        encode_component(&quote.text),
        TUMBLR_SUFFIX
    )
}
