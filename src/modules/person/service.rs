use std::sync::Arc;

use erudio_db::{Page, Pageable};
use erudio_http::{
    error::AppError,
    hateoas::{encode_segment, LinkBuilder, PageMetadata, PagedModel},
};
use tracing::info;

use super::{
    models::{Person, PersonVo, PersonVoV2},
    repository::PersonRepository,
};

const RESOURCE: &str = "person";
const NOT_FOUND_MESSAGE: &str = "No records found for this ID!";

#[derive(Clone)]
pub struct PersonService {
    repository: Arc<dyn PersonRepository>,
    links: LinkBuilder,
}

impl PersonService {
    pub fn new(repository: Arc<dyn PersonRepository>, links: LinkBuilder) -> Self {
        Self { repository, links }
    }

    fn with_self_link(&self, mut vo: PersonVo) -> PersonVo {
        vo.links.push(self.links.self_link(RESOURCE, vo.key));
        vo
    }

    fn paged(&self, page: Page<Person>, path: &str) -> PagedModel<PersonVo> {
        let metadata = PageMetadata::new(
            u64::from(page.pageable.size),
            page.total_elements,
            u64::from(page.pageable.page),
        );
        let links = self
            .links
            .page_links(path, &metadata, page.pageable.direction.as_str());
        let page = page.map(|person| self.with_self_link(person.into()));

        PagedModel {
            content: page.content,
            links,
            page: metadata,
        }
    }

    async fn load(&self, key: i64) -> Result<Person, AppError> {
        self.repository
            .find_by_id(key)
            .await?
            .ok_or_else(|| AppError::not_found(NOT_FOUND_MESSAGE))
    }

    pub async fn find_all(&self, pageable: Pageable) -> Result<PagedModel<PersonVo>, AppError> {
        info!("Finding all people");
        let page = self.repository.find_all(pageable).await?;
        Ok(self.paged(page, "/person"))
    }

    pub async fn find_by_name(
        &self,
        first_name: &str,
        pageable: Pageable,
    ) -> Result<PagedModel<PersonVo>, AppError> {
        info!(first_name, "Finding people by name");
        let page = self
            .repository
            .find_by_first_name(first_name, pageable)
            .await?;
        Ok(self.paged(
            page,
            &format!("/person/findPersonByName/{}", encode_segment(first_name)),
        ))
    }

    pub async fn find_by_key(&self, key: i64) -> Result<PersonVo, AppError> {
        info!(key, "Finding one person");
        let person = self.load(key).await?;
        Ok(self.with_self_link(person.into()))
    }

    /// Persist a new person; any key in the payload is ignored.
    pub async fn create(&self, vo: Option<PersonVo>) -> Result<PersonVo, AppError> {
        let vo = vo.ok_or_else(AppError::required_object_is_null)?;
        info!("Creating one person");

        let mut person = Person::from(vo);
        person.id = 0;
        let saved = self.repository.save(&person).await?;
        Ok(self.with_self_link(saved.into()))
    }

    pub async fn create_v2(&self, vo: Option<PersonVoV2>) -> Result<PersonVoV2, AppError> {
        let vo = vo.ok_or_else(AppError::required_object_is_null)?;
        info!("Creating one person with V2");

        let mut person = Person::from(vo);
        person.id = 0;
        let saved = self.repository.save(&person).await?;
        Ok(saved.into())
    }

    /// Overwrite the mutable fields of an existing person. `enabled` is kept.
    pub async fn update(&self, vo: Option<PersonVo>) -> Result<PersonVo, AppError> {
        let vo = vo.ok_or_else(AppError::required_object_is_null)?;
        info!(key = vo.key, "Updating one person");

        let mut person = self.load(vo.key).await?;
        person.first_name = vo.first_name;
        person.last_name = vo.last_name;
        person.address = vo.address;
        person.gender = vo.gender;

        let saved = self.repository.save(&person).await?;
        Ok(self.with_self_link(saved.into()))
    }

    pub async fn disable(&self, key: i64) -> Result<PersonVo, AppError> {
        info!(key, "Disabling one person");
        if !self.repository.disable(key).await? {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }
        let person = self.load(key).await?;
        Ok(self.with_self_link(person.into()))
    }

    pub async fn delete(&self, key: i64) -> Result<(), AppError> {
        info!(key, "Deleting one person");
        if !self.repository.delete(key).await? {
            return Err(AppError::not_found(NOT_FOUND_MESSAGE));
        }
        Ok(())
    }
}
