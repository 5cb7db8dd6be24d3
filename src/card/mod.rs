//! SVG "now playing" cards.
//!
//! Every card shares one frame: a 480×133 SVG holding an XHTML
//! `foreignObject` with the cover on the left and centred text lines on the
//! right. The per-kind modules derive the text lines from a Jellyfin item and
//! add whatever decoration their card needs.

pub mod movie;
pub mod music;
pub mod tv;

use std::borrow::Cow;

use crate::jellyfin::models::Item;
use crate::media::kind::MediaKind;

pub use movie::MovieCard;
pub use music::MusicCard;
pub use tv::TvCard;

pub const CARD_WIDTH: u32 = 480;
pub const CARD_HEIGHT: u32 = 133;

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, Segoe UI, Helvetica, Arial, sans-serif, Apple Color Emoji, Segoe UI Emoji";

/// Render the card of `kind` for `item` around an already base64-encoded cover.
pub fn render(kind: MediaKind, item: &Item, image_b64: &str) -> String {
    match kind {
        MediaKind::Movie => MovieCard::from_item(item).render(image_b64),
        MediaKind::Audio => MusicCard::from_item(item).render(image_b64),
        MediaKind::Episode => TvCard::from_item(item).render(image_b64),
    }
}

/// Escape text before it is placed inside the XHTML body.
pub fn escape(s: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(s)
}

/// Cover geometry. Posters are portrait, album art is square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Cover {
    Poster,
    Album,
}

impl Cover {
    fn style(self) -> &'static str {
        match self {
            Cover::Poster => ".cover { width: 100px; height: 150px; border-radius: 5px; object-fit: cover; }",
            Cover::Album => ".cover { width: 100px; height: 100px; border-radius: 5px; }",
        }
    }
}

/// Assemble the shared frame. `lines` are raw XHTML fragments for the text
/// column; `extra_style` is appended to the stylesheet.
pub(crate) fn frame(cover: Cover, image_b64: &str, lines: &str, extra_style: &str) -> String {
    format!(
        r##"<svg width="{w}" height="{h}" xmlns="http://www.w3.org/2000/svg">
  <foreignObject width="{w}" height="{h}">
    <div xmlns="http://www.w3.org/1999/xhtml" class="container">
      <style>
        .main {{ display: flex; }}
        .container {{ border-radius: 5px; padding: 10px 10px 10px 0px; }}
        .art {{ width: 27%; float: left; margin-left: -5px; }}
        .content {{ width: 71%; }}
        .title {{ color: #666; overflow: hidden; margin-top: 3px; font-size: 24px; text-align: center; white-space: nowrap; text-overflow: ellipsis; }}
        .subtitle {{ color: #b3b3b3; font-size: 20px; margin-top: 4px; text-align: center; margin-bottom: 5px; }}
        {cover_style}
        div {{ font-family: {fonts}; }}{extra_style}
      </style>
      <div class="main">
        <a class="art" href="#" target="_blank">
          <center>
            <img src="data:image/jpeg;base64,{image_b64}" class="cover" />
          </center>
        </a>
        <div class="content">
{lines}
        </div>
      </div>
    </div>
  </foreignObject>
</svg>"##,
        w = CARD_WIDTH,
        h = CARD_HEIGHT,
        cover_style = cover.style(),
        fonts = FONT_STACK,
        extra_style = extra_style,
        image_b64 = image_b64,
        lines = lines,
    )
}

/// One escaped text line of the content column.
pub(crate) fn line(class: &str, text: &str) -> String {
    format!("          <div class=\"{class}\">{}</div>", escape(text))
}
