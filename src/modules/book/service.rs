use std::sync::Arc;

use erudio_db::Pageable;
use erudio_http::{
    error::AppError,
    hateoas::{LinkBuilder, PageMetadata, PagedModel},
};
use tracing::info;

use super::{
    models::{Book, BookVo},
    repository::BookRepository,
};

const RESOURCE: &str = "book";
const NOT_FOUND_MESSAGE: &str = "No records found for this ID!";

#[derive(Clone)]
pub struct BookService {
    repository: Arc<dyn BookRepository>,
    links: LinkBuilder,
}

impl BookService {
    pub fn new(repository: Arc<dyn BookRepository>, links: LinkBuilder) -> Self {
        Self { repository, links }
    }

    fn with_self_link(&self, mut vo: BookVo) -> BookVo {
        vo.links.push(self.links.self_link(RESOURCE, vo.key));
        vo
    }

    async fn load(&self, key: i64) -> Result<Book, AppError> {
        self.repository
            .find_by_id(key)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    pub async fn find_all(&self, pageable: Pageable) -> Result<PagedModel<BookVo>, AppError> {
        info!("Finding all books");
        let page = self.repository.find_all(pageable).await?;

        let metadata = PageMetadata::new(
            u64::from(pageable.size),
            page.total_elements,
            u64::from(pageable.page),
        );
        let links = self
            .links
            .page_links("/book", &metadata, pageable.direction.as_str());
        let page = page.map(|book| self.with_self_link(book.into()));

        Ok(PagedModel {
            content: page.content,
            links,
            page: metadata,
        })
    }

    pub async fn find_by_key(&self, key: i64) -> Result<BookVo, AppError> {
        info!(key, "Finding one book");
        let book = self.load(key).await?;
        Ok(self.with_self_link(book.into()))
    }

    /// Persist a new book; any key in the payload is ignored.
    pub async fn create(&self, vo: Option<BookVo>) -> Result<BookVo, AppError> {
        let vo = vo.ok_or_else(AppError::required_object_is_null)?;
        info!("Creating one book");

        let mut book = Book::from(vo);
        book.id = 0;
        let saved = self.repository.save(&book).await?;
        Ok(self.with_self_link(saved.into()))
    }

    pub async fn update(&self, vo: Option<BookVo>) -> Result<BookVo, AppError> {
        let vo = vo.ok_or_else(AppError::required_object_is_null)?;
        info!(key = vo.key, "Updating one book");

        let mut book = self.load(vo.key).await?;
        book.author = vo.author;
        book.launch_date = vo.launch_date;
        book.price = vo.price;
        book.title = vo.title;

        let saved = self.repository.save(&book).await?;
        Ok(self.with_self_link(saved.into()))
    }

    pub async fn delete(&self, key: i64) -> Result<(), AppError> {
        info!(key, "Deleting one book");
        if !self.repository.delete(key).await? {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(())
    }
}
