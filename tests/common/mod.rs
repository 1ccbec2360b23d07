// tests/common/mod.rs
//
// Offline stand-ins for the live site: canned pages served by URL, and
// builders for listing/thread markup shaped like the real thing.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use hiring_scrape::config::options::Settings;
use hiring_scrape::core::Transport;
use hiring_scrape::{Result, ScrapeError};

pub const BASE: &str = "https://news.ycombinator.com/";
pub const LISTING: &str = "https://news.ycombinator.com/submitted?id=whoishiring";

/// Serves canned bodies; unknown URLs get an empty page, like a thread
/// probed past its last page.
#[derive(Clone, Default)]
pub struct Fixtures {
    pages: HashMap<String, String>,
    failing: HashSet<String>,
    hits: Rc<RefCell<Vec<String>>>,
}

impl Fixtures {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, body: String) -> Self {
        self.pages.insert(url.to_string(), body);
        self
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Shared log of every URL that reached the transport.
    pub fn hits(&self) -> Rc<RefCell<Vec<String>>> {
        Rc::clone(&self.hits)
    }
}

impl Transport for Fixtures {
    fn get(&self, url: &str) -> Result<String> {
        self.hits.borrow_mut().push(url.to_string());
        if self.failing.contains(url) {
            return Err(ScrapeError::fetch(url, "HTTP 503 Service Unavailable"));
        }
        Ok(self.pages.get(url).cloned().unwrap_or_else(|| page("")))
    }
}

pub fn settings() -> Settings {
    Settings {
        request_pause: std::time::Duration::ZERO,
        ..Settings::default()
    }
}

pub fn item(id: u32) -> String {
    format!("{BASE}item?id={id}")
}

pub fn page_of(id: u32, n: usize) -> String {
    format!("{}&p={n}", item(id))
}

fn page(inner: &str) -> String {
    format!(
        "<html><head><title>Hacker News</title></head><body><center>\
         <table id=\"hnmain\"><tr><td>{inner}</td></tr></table></center></body></html>"
    )
}

/// Submissions listing with one story per `(id, title)`.
pub fn listing(stories: &[(u32, &str)]) -> String {
    let mut rows = String::new();
    for (rank, (id, title)) in stories.iter().enumerate() {
        rows.push_str(&format!(
            "<tr class=\"athing submission\" id=\"{id}\">\
               <td align=\"right\" valign=\"top\" class=\"title\"><span class=\"rank\">{}.</span></td>\
               <td valign=\"top\" class=\"votelinks\"></td>\
               <td class=\"title\"><span class=\"titleline\"><a href=\"item?id={id}\">{title}</a></span></td>\
             </tr>\
             <tr><td colspan=\"2\"></td><td class=\"subtext\"><span class=\"subline\">\
               <a href=\"user?id=whoishiring\" class=\"hnuser\">whoishiring</a> \
               <span class=\"age\"><a href=\"item?id={id}\">1 day ago</a></span></span></td></tr>",
            rank + 1
        ));
    }
    page(&format!("<table border=\"0\" cellpadding=\"0\" cellspacing=\"0\">{rows}</table>"))
}

pub enum Post<'a> {
    /// Top-level post with this body (HTML allowed).
    Top(u32, &'a str),
    /// A reply, indented under the previous post.
    Reply(u32, &'a str),
    /// Deleted/flagged top-level comment: no text body.
    Dead(u32),
}

fn comment_row(id: u32, indent: u32, body: Option<&str>) -> String {
    let body = body
        .map(|b| format!("<div class=\"comment\"><div class=\"commtext c00\">{b}</div>\
                          <div class=\"reply\"><p><font size=\"1\"><u><a href=\"reply?id={id}\">reply</a></u></font></p></div></div>"))
        .unwrap_or_else(|| "<div class=\"comment\"></div>".to_string());
    format!(
        "<tr class=\"athing comtr\" id=\"{id}\"><td><table border=\"0\"><tr>\
           <td class=\"ind\" indent=\"{indent}\"><img src=\"s.gif\" height=\"1\" width=\"{}\"></td>\
           <td valign=\"top\" class=\"votelinks\"><center></center></td>\
           <td class=\"default\"><div style=\"margin-top:2px; margin-bottom:-10px;\"><span class=\"comhead\">\
             <a href=\"user?id=poster{id}\" class=\"hnuser\">poster{id}</a> \
             <span class=\"age\" title=\"2024-04-01T15:00:00\"><a href=\"item?id={id}\">2 hours ago</a></span>\
           </span></div><br>{body}</td>\
         </tr></table></td></tr>",
        indent * 40
    )
}

/// One page of a thread.
pub fn thread_page(posts: &[Post<'_>]) -> String {
    let mut rows = String::new();
    for p in posts {
        rows.push_str(&match p {
            Post::Top(id, body) => comment_row(*id, 0, Some(body)),
            Post::Reply(id, body) => comment_row(*id, 1, Some(body)),
            Post::Dead(id) => comment_row(*id, 0, None),
        });
    }
    page(&format!("<table class=\"comment-tree\">{rows}</table>"))
}

/// A page where every post is a conforming `Name | ...` posting.
pub fn companies_page(first_id: u32, names: &[&str]) -> String {
    let bodies: Vec<String> = names.iter().map(|n| format!("{n} | Engineer | Remote")).collect();
    let posts: Vec<Post<'_>> = bodies
        .iter()
        .enumerate()
        .map(|(i, b)| Post::Top(first_id + i as u32, b.as_str()))
        .collect();
    thread_page(&posts)
}
