use chrono::NaiveDate;
use erudio_http::hateoas::Link;
use serde::{Deserialize, Serialize};

/// Row of the `book` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: i64,
    pub author: String,
    pub launch_date: NaiveDate,
    pub price: f64,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename = "book")]
pub struct BookVo {
    #[serde(rename = "id", default)]
    pub key: i64,
    #[serde(default)]
    pub author: String,
    pub launch_date: NaiveDate,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub links: Vec<Link>,
}

impl From<Book> for BookVo {
    fn from(book: Book) -> Self {
        Self {
            key: book.id,
            author: book.author,
            launch_date: book.launch_date,
            price: book.price,
            title: book.title,
            links: Vec::new(),
        }
    }
}

impl From<BookVo> for Book {
    fn from(vo: BookVo) -> Self {
        Self {
            id: vo.key,
            author: vo.author,
            launch_date: vo.launch_date,
            price: vo.price,
            title: vo.title,
        }
    }
}
